//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod agent;
pub mod autopilot;
pub mod grid;
pub mod motion;
pub mod outcome;
pub mod player;
pub mod pursuer;
pub mod state;
pub mod tick;

pub use agent::{Agent, Direction};
pub use autopilot::{Autopilot, reachable_tiles};
pub use grid::{Grid, TileKind, TilePos};
pub use motion::{MotionRules, MotionStep, resolve_motion};
pub use outcome::{Outcome, evaluate};
pub use player::Player;
pub use pursuer::Pursuer;
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, tick};
