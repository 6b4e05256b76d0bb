//! Fixed timestep simulation tick
//!
//! One tick: apply input, move the player, move the pursuer, evaluate.

use super::agent::Direction;
use super::outcome::evaluate;
use super::state::GameState;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Direction currently requested by the input device; `None` leaves the
    /// player's queued turn untouched
    pub desired: Direction,
}

impl TickInput {
    pub fn new(desired: Direction) -> Self {
        Self { desired }
    }
}

/// Advance the game state by one fixed timestep. No-op once the game is over.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.outcome.is_terminal() {
        return;
    }

    state.time_ticks += 1;

    if input.desired != Direction::None {
        state.player.set_desired_direction(input.desired);
    }

    if let Some(tile) = state.player.tick(&mut state.grid, &state.rules) {
        state.award(tile);
    }

    state
        .pursuer
        .tick(&state.grid, &state.rules, &mut state.rng);

    let outcome = evaluate(
        state.outcome,
        &state.player.agent,
        &state.pursuer.agent,
        &state.grid,
        state.contact_distance,
    );
    state.set_outcome(outcome);
}
