//! Configuration errors
//!
//! The simulation itself has no failure path; everything that can go wrong
//! is caught while validating the configuration, before any state exists.

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("layout has no tiles")]
    EmptyLayout,

    #[error("layout row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile character {ch:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, ch: char },

    #[error("border tile at row {row}, column {col} must be a wall")]
    OpenBorder { row: usize, col: usize },

    #[error("{agent} start tile ({row}, {col}) is outside the grid")]
    StartOutOfBounds { agent: &'static str, row: i32, col: i32 },

    #[error("{agent} start tile ({row}, {col}) is a wall")]
    StartInWall { agent: &'static str, row: i32, col: i32 },

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{agent} speed must be finite and non-negative, got {value}")]
    InvalidSpeed { agent: &'static str, value: f32 },

    #[error("{agent} radius + speed ({reach}) must stay below the tile size ({tile_size})")]
    ReachTooLong {
        agent: &'static str,
        reach: f32,
        tile_size: f32,
    },

    #[error("turn tolerance {tolerance} is too tight for {agent} speed {speed}")]
    ToleranceTooTight {
        agent: &'static str,
        tolerance: f32,
        speed: f32,
    },

    #[error("turn tolerance {tolerance} must be below half the tile size ({tile_size})")]
    ToleranceTooWide { tolerance: f32, tile_size: f32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
