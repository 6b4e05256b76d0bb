//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], owned by the
//! game loop and passed by `&mut` into each step.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::agent::Agent;
use super::grid::{Grid, TilePos};
use super::motion::MotionRules;
use super::outcome::Outcome;
use super::player::Player;
use super::pursuer::Pursuer;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::tile_center;

/// Something the outside world may want to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    PelletEaten { row: i32, col: i32 },
    ScoreChanged { score: u32 },
    OutcomeChanged { outcome: Outcome },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub pursuer: Pursuer,
    pub rules: MotionRules,
    /// Points per collectible
    pub reward: u32,
    pub contact_distance: f32,
    pub score: u32,
    pub outcome: Outcome,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    /// Pursuer decision source
    pub rng: Pcg32,
}

impl GameState {
    /// Build a game from a config, seeding the pursuer RNG from `config.seed`
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(config.seed))
    }

    /// Build a game with an explicit pursuer RNG
    pub fn with_rng(config: &GameConfig, rng: Pcg32) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let spawn = |start: TilePos, speed: f32, radius: f32| {
            Agent::new(
                tile_center(start.row, start.col, config.tile_size),
                speed,
                radius,
            )
        };

        let player = Player::new(spawn(
            config.player.start,
            config.player.speed,
            config.player.radius,
        ));
        let pursuer = Pursuer::new(
            spawn(
                config.pursuer.start,
                config.pursuer.speed,
                config.pursuer.radius,
            ),
            config.pursuer.color.clone(),
        );

        log::info!(
            "New game: {}x{} grid, {} pellets, seed {}",
            grid.rows(),
            grid.cols(),
            grid.total_collectibles(),
            config.seed
        );

        Ok(Self {
            grid,
            player,
            pursuer,
            rules: MotionRules {
                tile_size: config.tile_size,
                turn_tolerance: config.turn_tolerance,
            },
            reward: config.reward,
            contact_distance: config.contact_distance(),
            score: 0,
            outcome: Outcome::InProgress,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        })
    }

    /// Credit a consumed collectible
    pub fn award(&mut self, tile: TilePos) {
        self.score = self.score.saturating_add(self.reward);
        self.events.push(GameEvent::PelletEaten {
            row: tile.row,
            col: tile.col,
        });
        self.events.push(GameEvent::ScoreChanged { score: self.score });
    }

    pub fn set_outcome(&mut self, outcome: Outcome) {
        if outcome == self.outcome || self.outcome.is_terminal() {
            return;
        }
        self.outcome = outcome;
        self.events.push(GameEvent::OutcomeChanged { outcome });
        log::info!(
            "Game over at tick {}: {:?} with score {}",
            self.time_ticks,
            outcome,
            self.score
        );
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
