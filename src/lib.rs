//! Maze Chase - a grid maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, motion, player, pursuer, outcome)
//! - `game_loop`: Fixed timestep driver that owns the simulation
//! - `renderer`: Render snapshots and a text renderer
//! - `platform`: Keyboard mapping and input buffering
//! - `config`: Data-driven game configuration

pub mod config;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{AgentConfig, GameConfig, PursuerConfig};
pub use error::ConfigError;
pub use game_loop::{GameLoop, LoopPhase};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, speeds are expressed per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Tile edge length in pixels
    pub const TILE_SIZE: f32 = 28.0;

    /// Agent defaults
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PURSUER_SPEED: f32 = 2.2;
    /// Agent radius as a fraction of the tile size
    pub const AGENT_RADIUS_FACTOR: f32 = 0.4;

    /// How far from a tile center (pixels, per axis) an agent may be and still turn
    pub const TURN_TOLERANCE: f32 = 3.0;

    /// Points per collectible
    pub const PELLET_REWARD: u32 = 10;

    pub const PURSUER_COLOR: &str = "#FF2D55";
}

/// Center of tile (row, col) in pixel space
#[inline]
pub fn tile_center(row: i32, col: i32, tile_size: f32) -> Vec2 {
    Vec2::new(
        col as f32 * tile_size + tile_size / 2.0,
        row as f32 * tile_size + tile_size / 2.0,
    )
}

/// Tile (row, col) containing a pixel-space point
#[inline]
pub fn tile_index(pos: Vec2, tile_size: f32) -> (i32, i32) {
    (
        (pos.y / tile_size).floor() as i32,
        (pos.x / tile_size).floor() as i32,
    )
}
