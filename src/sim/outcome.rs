//! Capture and clear detection

use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::grid::Grid;

/// Result of the run so far. Once terminal it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// Evaluate the end conditions after both agents have moved.
///
/// Capture is checked before the clear, so catching the player on the tick
/// the last pellet goes is still a loss.
pub fn evaluate(
    current: Outcome,
    player: &Agent,
    pursuer: &Agent,
    grid: &Grid,
    contact_distance: f32,
) -> Outcome {
    if current.is_terminal() {
        return current;
    }
    if player.distance_to(pursuer) < contact_distance {
        return Outcome::Lost;
    }
    if grid.remaining_collectible_count() == 0 {
        return Outcome::Won;
    }
    Outcome::InProgress
}
