//! Player controller

use serde::Serialize;

use super::agent::{Agent, Direction};
use super::grid::{Grid, TilePos};
use super::motion::{MotionRules, resolve_motion};

/// The player-controlled agent and its buffered intent
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub agent: Agent,
    /// Latest requested direction, applied at the next turn point
    pub desired: Direction,
}

impl Player {
    pub fn new(agent: Agent) -> Self {
        Self {
            agent,
            desired: Direction::None,
        }
    }

    /// Overwrite the buffered intent. Idempotent.
    pub fn set_desired_direction(&mut self, dir: Direction) {
        self.desired = dir;
    }

    pub fn tile(&self, rules: &MotionRules) -> TilePos {
        rules.tile_of(self.agent.pos)
    }

    /// Move one tick, then eat whatever collectible is under the agent's center.
    ///
    /// Returns the tile that was consumed, if any.
    pub fn tick(&mut self, grid: &mut Grid, rules: &MotionRules) -> Option<TilePos> {
        resolve_motion(&mut self.agent, self.desired, grid, rules);

        let tile = self.tile(rules);
        if grid.consume_if_collectible(tile.row, tile.col) {
            log::debug!("Pellet eaten at ({}, {})", tile.row, tile.col);
            Some(tile)
        } else {
            None
        }
    }
}
