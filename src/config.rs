//! Game configuration
//!
//! Supplied once at construction. Any JSON file may override a subset of the
//! fields; the rest fall back to the classic level.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{Grid, TilePos};

/// The classic 21x19 level (`#` wall, `.` pellet, space empty)
pub const CLASSIC_LAYOUT: [&str; 21] = [
    "###################",
    "#........#........#",
    "#.###.##.#.##.###.#",
    "#.................#",
    "#.##.#########.##.#",
    "#........#........#",
    "########.#.########",
    "#......#...#......#",
    "#.####.##.##.####.#",
    "#........ ........#",
    "#.####.##.##.####.#",
    "#......#...#......#",
    "########.#.########",
    "#........#........#",
    "#.##.#########.##.#",
    "#........#........#",
    "#.###.##.#.##.###.#",
    "#........#........#",
    "###################",
    "###################",
    "###################",
];

/// Starting tile and motion parameters for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub start: TilePos,
    /// Pixels per tick
    pub speed: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PursuerConfig {
    pub start: TilePos,
    pub speed: f32,
    pub radius: f32,
    pub color: String,
}

impl PursuerConfig {
    pub fn agent(&self) -> AgentConfig {
        AgentConfig {
            start: self.start,
            speed: self.speed,
            radius: self.radius,
        }
    }
}

/// Everything needed to build a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tile edge length in pixels
    pub tile_size: f32,
    /// Per-axis distance from a tile center within which turns are granted
    pub turn_tolerance: f32,
    pub layout: Vec<String>,
    pub player: AgentConfig,
    pub pursuer: PursuerConfig,
    /// Points per collectible
    pub reward: u32,
    /// Center distance below which the player is caught
    /// (defaults to the sum of both radii)
    pub contact_distance: Option<f32>,
    /// Pursuer RNG seed
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        let radius = TILE_SIZE * AGENT_RADIUS_FACTOR;
        Self {
            tile_size: TILE_SIZE,
            turn_tolerance: TURN_TOLERANCE,
            layout: CLASSIC_LAYOUT.iter().map(|row| row.to_string()).collect(),
            player: AgentConfig {
                start: TilePos::new(9, 9),
                speed: PLAYER_SPEED,
                radius,
            },
            pursuer: PursuerConfig {
                start: TilePos::new(7, 10),
                speed: PURSUER_SPEED,
                radius,
                color: PURSUER_COLOR.to_string(),
            },
            reward: PELLET_REWARD,
            contact_distance: None,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Effective capture distance
    pub fn contact_distance(&self) -> f32 {
        self.contact_distance
            .unwrap_or(self.player.radius + self.pursuer.radius)
    }

    /// Parse the layout into a grid
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::from_rows(&self.layout)
    }

    /// Check every constraint the simulation relies on. Returns the parsed grid.
    pub fn validate(&self) -> Result<Grid, ConfigError> {
        positive("tile_size", self.tile_size)?;
        positive("turn_tolerance", self.turn_tolerance)?;
        if self.turn_tolerance >= self.tile_size / 2.0 {
            return Err(ConfigError::ToleranceTooWide {
                tolerance: self.turn_tolerance,
                tile_size: self.tile_size,
            });
        }
        if let Some(distance) = self.contact_distance {
            positive("contact_distance", distance)?;
        }

        let grid = self.grid()?;
        self.validate_agent("player", &self.player, &grid)?;
        self.validate_agent("pursuer", &self.pursuer.agent(), &grid)?;
        Ok(grid)
    }

    fn validate_agent(
        &self,
        agent: &'static str,
        config: &AgentConfig,
        grid: &Grid,
    ) -> Result<(), ConfigError> {
        let TilePos { row, col } = config.start;
        if !grid.contains(row, col) {
            return Err(ConfigError::StartOutOfBounds { agent, row, col });
        }
        if grid.is_wall(row, col) {
            return Err(ConfigError::StartInWall { agent, row, col });
        }

        positive(
            if agent == "player" {
                "player.radius"
            } else {
                "pursuer.radius"
            },
            config.radius,
        )?;
        if !config.speed.is_finite() || config.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed {
                agent,
                value: config.speed,
            });
        }

        let reach = config.radius + config.speed;
        if reach >= self.tile_size {
            return Err(ConfigError::ReachTooLong {
                agent,
                reach,
                tile_size: self.tile_size,
            });
        }
        // Every tile center must fall inside some tick's turn window
        if self.turn_tolerance * 2.0 < config.speed {
            return Err(ConfigError::ToleranceTooTight {
                agent,
                tolerance: self.turn_tolerance,
                speed: config.speed,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::autopilot::reachable_tiles;
    use crate::sim::TileKind;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        let grid = config.validate().unwrap();
        assert_eq!(grid.rows(), 21);
        assert_eq!(grid.cols(), 19);
        assert!((config.contact_distance() - 22.4).abs() < 1e-4);
    }

    #[test]
    fn test_classic_layout_pellets_all_reachable() {
        let config = GameConfig::default();
        let grid = config.grid().unwrap();
        let reachable = reachable_tiles(&grid, config.player.start);
        for row in 0..grid.rows() as i32 {
            for col in 0..grid.cols() as i32 {
                if grid.tile_at(row, col) == TileKind::Collectible {
                    assert!(reachable.contains(&TilePos::new(row, col)));
                }
            }
        }
        assert!(reachable.contains(&config.pursuer.start));
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = GameConfig::from_json_str(r#"{ "seed": 77, "reward": 50 }"#).unwrap();
        assert_eq!(config.seed, 77);
        assert_eq!(config.reward, 50);
        assert_eq!(config.layout.len(), 21);
    }

    #[test]
    fn test_start_in_wall_fails_fast() {
        let mut config = GameConfig::default();
        config.pursuer.start = TilePos::new(0, 0);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::StartInWall { agent: "pursuer", .. }
        ));

        config.pursuer.start = TilePos::new(40, 2);
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::StartOutOfBounds { agent: "pursuer", .. }
        ));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let mut config = GameConfig::default();
        config.tile_size = 0.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::NonPositive { field: "tile_size", .. }
        ));

        let mut config = GameConfig::default();
        config.layout.clear();
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::EmptyLayout
        ));

        let mut config = GameConfig::default();
        config.player.radius = -1.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::NonPositive { field: "player.radius", .. }
        ));
    }

    #[test]
    fn test_rejects_unsafe_motion_parameters() {
        let mut config = GameConfig::default();
        config.player.speed = 20.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::ReachTooLong { agent: "player", .. }
        ));

        let mut config = GameConfig::default();
        config.pursuer.speed = 7.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::ToleranceTooTight { agent: "pursuer", .. }
        ));

        let mut config = GameConfig::default();
        config.turn_tolerance = 14.0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::ToleranceTooWide { .. }
        ));

        let mut config = GameConfig::default();
        config.player.speed = f32::NAN;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidSpeed { agent: "player", .. }
        ));
    }

    #[test]
    fn test_bad_json_is_reported() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json").unwrap_err(),
            ConfigError::Json(_)
        ));
        assert!(matches!(
            GameConfig::load("/definitely/not/here.json").unwrap_err(),
            ConfigError::Io(_)
        ));
    }
}
