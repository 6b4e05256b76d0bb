//! Pursuer controller
//!
//! At every tile center the pursuer picks uniformly among the open
//! directions, never doubling back unless it is in a dead end. It does not
//! track the player.

use rand::Rng;
use serde::Serialize;

use super::agent::{Agent, Direction};
use super::grid::{Grid, TilePos};
use super::motion::{MotionRules, MotionStep, resolve_motion};

#[derive(Debug, Clone, Serialize)]
pub struct Pursuer {
    pub agent: Agent,
    /// Display color, passed through to renderers
    pub color: String,
    /// Direction chosen at the last decision point
    pub requested: Direction,
    /// Tile of the last decision, so each tile center is decided once
    last_decision: Option<TilePos>,
}

impl Pursuer {
    pub fn new(agent: Agent, color: impl Into<String>) -> Self {
        Self {
            agent,
            color: color.into(),
            requested: Direction::None,
            last_decision: None,
        }
    }

    /// Open directions out of `tile`, minus the way back unless that is all there is
    pub fn legal_directions(&self, grid: &Grid, tile: TilePos) -> Vec<Direction> {
        let open = grid.open_neighbors(tile);
        let reverse = self.agent.dir.opposite();
        if reverse == Direction::None {
            return open;
        }
        let forward: Vec<Direction> = open.iter().copied().filter(|d| *d != reverse).collect();
        if forward.is_empty() { open } else { forward }
    }

    /// Uniform pick among the legal directions; `None` when boxed in
    pub fn choose_direction<R: Rng>(&self, grid: &Grid, tile: TilePos, rng: &mut R) -> Direction {
        let legal = self.legal_directions(grid, tile);
        if legal.is_empty() {
            return Direction::None;
        }
        legal[rng.random_range(0..legal.len())]
    }

    /// Decide when stopped, or once per tile when centered on it
    pub fn should_decide(&self, rules: &MotionRules) -> bool {
        if self.agent.dir == Direction::None {
            return true;
        }
        let tile = rules.tile_of(self.agent.pos);
        rules.is_aligned(self.agent.pos) && self.last_decision != Some(tile)
    }

    pub fn tick<R: Rng>(&mut self, grid: &Grid, rules: &MotionRules, rng: &mut R) -> MotionStep {
        if self.should_decide(rules) {
            let tile = rules.tile_of(self.agent.pos);
            self.requested = self.choose_direction(grid, tile, rng);
            self.last_decision = Some(tile);
            log::debug!(
                "Pursuer at ({}, {}) heading {:?}",
                tile.row,
                tile.col,
                self.requested
            );
        }
        resolve_motion(&mut self.agent, self.requested, grid, rules)
    }
}
