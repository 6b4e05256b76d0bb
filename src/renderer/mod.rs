//! Rendering boundary
//!
//! The simulation never draws. Each frame the game loop hands a read-only
//! [`Snapshot`] to a [`RenderSink`]; what the sink does with it (canvas, GPU,
//! terminal) is its own business.

pub mod text;

pub use text::TextRenderer;

use serde::Serialize;

use crate::sim::{Agent, Direction, GameEvent, GameState, Grid, Outcome};

/// Drawable view of one agent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub dir: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl AgentView {
    fn of(agent: &Agent, color: Option<String>) -> Self {
        Self {
            x: agent.pos.x,
            y: agent.pos.y,
            radius: agent.radius,
            dir: agent.dir,
            color,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub tick: u64,
    pub tile_size: f32,
    pub grid: &'a Grid,
    pub player: AgentView,
    pub pursuer: AgentView,
    pub score: u32,
    pub remaining: usize,
    pub outcome: Outcome,
    /// Events since the previous frame
    pub events: Vec<GameEvent>,
}

impl<'a> Snapshot<'a> {
    pub fn capture(state: &'a GameState, events: Vec<GameEvent>) -> Self {
        Self {
            tick: state.time_ticks,
            tile_size: state.rules.tile_size,
            grid: &state.grid,
            player: AgentView::of(&state.player.agent, None),
            pursuer: AgentView::of(&state.pursuer.agent, Some(state.pursuer.color.clone())),
            score: state.score,
            remaining: state.grid.remaining_collectible_count(),
            outcome: state.outcome,
            events,
        }
    }
}

/// Receiver of frames and score updates
pub trait RenderSink {
    fn render(&mut self, frame: &Snapshot<'_>);

    /// Score display hook, called whenever the score changes
    fn score_changed(&mut self, _score: u32) {}
}
