//! Tile grid
//!
//! Fixed-shape tile classification. Off-grid queries answer Wall so callers
//! never need their own bounds checks.

use serde::{Deserialize, Serialize};

use super::agent::Direction;
use crate::error::ConfigError;

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Open,
    Collectible,
    ConsumedCollectible,
}

impl TileKind {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(TileKind::Wall),
            ' ' => Some(TileKind::Open),
            '.' => Some(TileKind::Collectible),
            '_' => Some(TileKind::ConsumedCollectible),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Open => ' ',
            TileKind::Collectible => '.',
            TileKind::ConsumedCollectible => '_',
        }
    }
}

/// A tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub row: i32,
    pub col: i32,
}

impl TilePos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighboring tile one step in `dir` (self for `Direction::None`)
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// Rectangular tile map with a wall border
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<TileKind>,
    remaining: usize,
    total: usize,
}

impl Grid {
    /// Parse a layout (`#` wall, `.` collectible, space open, `_` consumed).
    ///
    /// The layout must be non-empty, rectangular and enclosed by walls.
    pub fn from_rows<S: AsRef<str>>(layout: &[S]) -> Result<Self, ConfigError> {
        let rows = layout.len();
        let cols = layout.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyLayout);
        }

        let mut tiles = Vec::with_capacity(rows * cols);
        for (row, line) in layout.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(ConfigError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let kind =
                    TileKind::from_char(ch).ok_or(ConfigError::UnknownTile { row, col, ch })?;
                tiles.push(kind);
            }
        }

        Self::new(rows, cols, tiles)
    }

    /// Build a grid from row-major tiles, checking the wall border.
    pub fn new(rows: usize, cols: usize, tiles: Vec<TileKind>) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 || tiles.len() != rows * cols {
            return Err(ConfigError::EmptyLayout);
        }

        for row in 0..rows {
            for col in 0..cols {
                let border = row == 0 || col == 0 || row == rows - 1 || col == cols - 1;
                if border && tiles[row * cols + col] != TileKind::Wall {
                    return Err(ConfigError::OpenBorder { row, col });
                }
            }
        }

        let total = tiles
            .iter()
            .filter(|t| **t == TileKind::Collectible)
            .count();

        Ok(Self {
            rows,
            cols,
            tiles,
            remaining: total,
            total,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Tile kind at (row, col); anything off the grid is a wall
    pub fn tile_at(&self, row: i32, col: i32) -> TileKind {
        self.index(row, col)
            .map(|i| self.tiles[i])
            .unwrap_or(TileKind::Wall)
    }

    pub fn is_wall(&self, row: i32, col: i32) -> bool {
        self.tile_at(row, col) == TileKind::Wall
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Eat the collectible at (row, col). Returns true only on the first call
    /// for a given collectible tile.
    pub fn consume_if_collectible(&mut self, row: i32, col: i32) -> bool {
        let Some(i) = self.index(row, col) else {
            return false;
        };
        if self.tiles[i] != TileKind::Collectible {
            return false;
        }
        self.tiles[i] = TileKind::ConsumedCollectible;
        self.remaining -= 1;
        true
    }

    pub fn remaining_collectible_count(&self) -> usize {
        self.remaining
    }

    pub fn total_collectibles(&self) -> usize {
        self.total
    }

    /// Directions out of `tile` that do not lead into a wall, in N, S, E, W order
    pub fn open_neighbors(&self, tile: TilePos) -> Vec<Direction> {
        Direction::CARDINALS
            .into_iter()
            .filter(|&dir| {
                let next = tile.step(dir);
                !self.is_wall(next.row, next.col)
            })
            .collect()
    }

    /// Layout rows in the same character format accepted by [`Grid::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(TileKind::as_char).collect())
            .collect()
    }
}
