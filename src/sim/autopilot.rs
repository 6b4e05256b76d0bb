//! Demo mode: steers the player toward the nearest remaining pellet
//!
//! Plays the role of the input device, so it only ever produces a direction.

use std::collections::{HashSet, VecDeque};

use super::agent::Direction;
use super::grid::{Grid, TileKind, TilePos};
use super::state::GameState;

/// Breadth-first pellet seeker
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Treat the pursuer's tile as a wall when planning
    pub avoid_pursuer: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            avoid_pursuer: true,
        }
    }
}

impl Autopilot {
    /// First step on a shortest path to the closest collectible, or `None`
    /// when nothing reachable is left
    pub fn steer(&self, state: &GameState) -> Direction {
        let start = state.player.tile(&state.rules);
        let avoid = self
            .avoid_pursuer
            .then(|| state.rules.tile_of(state.pursuer.agent.pos))
            .filter(|tile| *tile != start);

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::new();
        for dir in Direction::CARDINALS {
            let next = start.step(dir);
            if passable(&state.grid, next, avoid) && visited.insert(next) {
                queue.push_back((next, dir));
            }
        }

        while let Some((tile, first)) = queue.pop_front() {
            if state.grid.tile_at(tile.row, tile.col) == TileKind::Collectible {
                return first;
            }
            for dir in Direction::CARDINALS {
                let next = tile.step(dir);
                if passable(&state.grid, next, avoid) && visited.insert(next) {
                    queue.push_back((next, first));
                }
            }
        }
        Direction::None
    }
}

fn passable(grid: &Grid, tile: TilePos, avoid: Option<TilePos>) -> bool {
    !grid.is_wall(tile.row, tile.col) && avoid != Some(tile)
}

/// Every non-wall tile connected to `start`
pub fn reachable_tiles(grid: &Grid, start: TilePos) -> HashSet<TilePos> {
    let mut visited = HashSet::new();
    if grid.is_wall(start.row, start.col) {
        return visited;
    }
    let mut queue = VecDeque::from([start]);
    visited.insert(start);
    while let Some(tile) = queue.pop_front() {
        for dir in grid.open_neighbors(tile) {
            let next = tile.step(dir);
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    visited
}
