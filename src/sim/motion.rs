//! Motion resolution against the tile grid
//!
//! Agents live in continuous pixel space but walls live in tile space. Two
//! rules keep them consistent:
//! - A turn onto a new axis is only granted while the agent sits within
//!   `turn_tolerance` of the tile center on the perpendicular axis. Reversal
//!   is always granted.
//! - Before moving, the leading edge is probed one step ahead
//!   (`pos + dir * (radius + speed)`); a wall there stops the agent and
//!   snaps it back onto the tile center along the blocked axis.
//!
//! With `radius + speed < tile_size` the agent center can therefore never
//! enter a wall tile.

use glam::Vec2;

use super::agent::{Agent, Direction};
use super::grid::{Grid, TilePos};
use crate::{tile_center, tile_index};

/// Geometry shared by every agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRules {
    pub tile_size: f32,
    /// Max per-axis distance from a tile center at which turns are granted (inclusive)
    pub turn_tolerance: f32,
}

impl MotionRules {
    pub fn tile_of(&self, pos: Vec2) -> TilePos {
        let (row, col) = tile_index(pos, self.tile_size);
        TilePos::new(row, col)
    }

    pub fn center_of(&self, tile: TilePos) -> Vec2 {
        tile_center(tile.row, tile.col, self.tile_size)
    }

    /// Offset of `pos` from the center of the tile it is in
    pub fn offset_from_center(&self, pos: Vec2) -> Vec2 {
        pos - self.center_of(self.tile_of(pos))
    }

    /// Whether `pos` is centered enough on the axis perpendicular to `dir` to turn onto it
    pub fn can_turn_onto(&self, pos: Vec2, dir: Direction) -> bool {
        let offset = self.offset_from_center(pos);
        if dir.is_vertical() {
            offset.x.abs() <= self.turn_tolerance
        } else if dir.is_horizontal() {
            offset.y.abs() <= self.turn_tolerance
        } else {
            true
        }
    }

    /// Centered within tolerance on both axes
    pub fn is_aligned(&self, pos: Vec2) -> bool {
        let offset = self.offset_from_center(pos);
        offset.x.abs() <= self.turn_tolerance && offset.y.abs() <= self.turn_tolerance
    }
}

/// What happened during one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MotionStep {
    /// The agent ended up moving in a different direction than before
    pub turned: bool,
    /// A wall stopped the agent this tick
    pub stopped: bool,
}

/// Move `agent` by one tick, honoring `requested` when the grid allows it.
///
/// A viable requested direction always beats the current one. `Direction::None`
/// as a request means "keep going".
pub fn resolve_motion(
    agent: &mut Agent,
    requested: Direction,
    grid: &Grid,
    rules: &MotionRules,
) -> MotionStep {
    let current = agent.dir;
    let mut pos = agent.pos;
    let center = rules.center_of(rules.tile_of(pos));

    let granted = if requested == Direction::None || requested == current {
        None
    } else if current != Direction::None && requested == current.opposite() {
        Some((requested, pos))
    } else if rules.can_turn_onto(pos, requested) {
        Some((requested, snap_perpendicular(pos, center, requested)))
    } else {
        None
    };

    let mut chosen = Direction::None;
    if let Some((dir, candidate)) = granted {
        if !probe_blocked(candidate, dir, agent, grid, rules) {
            pos = candidate;
            chosen = dir;
        }
    }
    if chosen == Direction::None
        && current != Direction::None
        && !probe_blocked(pos, current, agent, grid, rules)
    {
        chosen = current;
    }

    let mut stopped = false;
    if chosen == Direction::None {
        let blocked_dir = if current != Direction::None {
            current
        } else {
            granted.map(|(dir, _)| dir).unwrap_or(Direction::None)
        };
        if blocked_dir != Direction::None {
            pos = snap_along(pos, center, blocked_dir);
            stopped = true;
        }
    }

    pos += chosen.vector() * agent.speed;

    agent.pos = pos;
    agent.dir = chosen;

    MotionStep {
        turned: chosen != current && chosen != Direction::None,
        stopped,
    }
}

fn probe_blocked(pos: Vec2, dir: Direction, agent: &Agent, grid: &Grid, rules: &MotionRules) -> bool {
    let probe = pos + dir.vector() * (agent.radius + agent.speed);
    let tile = rules.tile_of(probe);
    grid.is_wall(tile.row, tile.col)
}

/// Put `pos` on the tile center along the axis perpendicular to `dir`
fn snap_perpendicular(pos: Vec2, center: Vec2, dir: Direction) -> Vec2 {
    if dir.is_vertical() {
        Vec2::new(center.x, pos.y)
    } else {
        Vec2::new(pos.x, center.y)
    }
}

/// Put `pos` on the tile center along the axis of `dir`
fn snap_along(pos: Vec2, center: Vec2, dir: Direction) -> Vec2 {
    if dir.is_horizontal() {
        Vec2::new(center.x, pos.y)
    } else {
        Vec2::new(pos.x, center.y)
    }
}
