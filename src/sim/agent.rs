//! Agents and cardinal directions

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement direction. Never diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    #[default]
    None,
}

impl Direction {
    /// The four movement directions, in decision order
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::None => Direction::None,
        }
    }

    /// Unit vector in pixel space (y grows downward)
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::North => Vec2::new(0.0, -1.0),
            Direction::South => Vec2::new(0.0, 1.0),
            Direction::East => Vec2::new(1.0, 0.0),
            Direction::West => Vec2::new(-1.0, 0.0),
            Direction::None => Vec2::ZERO,
        }
    }

    /// (row, col) delta
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::None => (0, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

/// A moving body on the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub pos: Vec2,
    pub dir: Direction,
    /// Pixels per tick
    pub speed: f32,
    pub radius: f32,
}

impl Agent {
    pub fn new(pos: Vec2, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            dir: Direction::None,
            speed,
            radius,
        }
    }

    pub fn distance_to(&self, other: &Agent) -> f32 {
        self.pos.distance(other.pos)
    }
}
