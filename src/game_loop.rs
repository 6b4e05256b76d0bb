//! Game loop driver
//!
//! Owns the simulation state and runs it at a fixed rate, independent of how
//! often the host calls in. A host typically calls [`GameLoop::advance`] once
//! per display frame with the elapsed wall-clock time.

use crate::config::GameConfig;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::ConfigError;
use crate::platform::InputBuffer;
use crate::renderer::{RenderSink, Snapshot};
use crate::sim::{Direction, GameEvent, GameState, TickInput, tick};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    NotStarted,
    Running,
    /// Terminal: the outcome is decided and the state is frozen
    Ended,
}

/// Fixed timestep driver around a [`GameState`]
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    phase: LoopPhase,
    input: InputBuffer,
    accumulator: f32,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(config)?))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            phase: LoopPhase::NotStarted,
            input: InputBuffer::default(),
            accumulator: 0.0,
        }
    }

    pub fn start(&mut self) {
        if self.phase == LoopPhase::NotStarted {
            self.phase = LoopPhase::Running;
            log::info!("Game loop running");
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Record the input device's current direction. May be called any number
    /// of times between ticks; only the latest value is used.
    pub fn set_desired_direction(&mut self, dir: Direction) {
        self.input.set(dir);
    }

    /// Run exactly one tick and render it. Returns false if nothing ran.
    pub fn step(&mut self, sink: &mut dyn RenderSink) -> bool {
        if !self.run_tick() {
            return false;
        }
        let events = self.state.drain_events();
        self.emit(events, sink);
        true
    }

    /// Feed elapsed wall-clock time, run as many whole ticks as it covers
    /// (capped at `MAX_SUBSTEPS`), then render once. Returns the tick count.
    pub fn advance(&mut self, frame_dt: f32, sink: &mut dyn RenderSink) -> u32 {
        if self.phase != LoopPhase::Running {
            return 0;
        }

        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if !self.run_tick() {
                break;
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if self.phase == LoopPhase::Ended {
            self.accumulator = 0.0;
        }

        let events = self.state.drain_events();
        self.emit(events, sink);
        substeps
    }

    fn run_tick(&mut self) -> bool {
        if self.phase != LoopPhase::Running {
            return false;
        }
        let input = TickInput::new(self.input.latest());
        tick(&mut self.state, &input);
        if self.state.outcome.is_terminal() {
            self.phase = LoopPhase::Ended;
            log::info!(
                "Game loop ended after {} ticks: {:?}",
                self.state.time_ticks,
                self.state.outcome
            );
        }
        true
    }

    fn emit(&self, events: Vec<GameEvent>, sink: &mut dyn RenderSink) {
        for event in &events {
            if let GameEvent::ScoreChanged { score } = event {
                sink.score_changed(*score);
            }
        }
        let frame = Snapshot::capture(&self.state, events);
        sink.render(&frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgentConfig, PursuerConfig};
    use crate::sim::{Outcome, TilePos};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(u64, u32, Outcome)>,
        scores: Vec<u32>,
    }

    impl RenderSink for Recorder {
        fn render(&mut self, frame: &Snapshot<'_>) {
            self.frames.push((frame.tick, frame.score, frame.outcome));
        }

        fn score_changed(&mut self, score: u32) {
            self.scores.push(score);
        }
    }

    fn corridor(pursuer: TilePos) -> GameConfig {
        GameConfig {
            layout: ["#########", "#.......#", "#########"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
            player: AgentConfig {
                start: TilePos::new(1, 1),
                speed: 3.0,
                radius: 11.2,
            },
            pursuer: PursuerConfig {
                start: pursuer,
                speed: 0.0,
                radius: 11.2,
                color: "#FF2D55".to_string(),
            },
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_nothing_runs_before_start() {
        let mut game = GameLoop::new(&corridor(TilePos::new(1, 7))).unwrap();
        let mut sink = Recorder::default();
        assert!(!game.step(&mut sink));
        assert_eq!(game.advance(1.0, &mut sink), 0);
        assert!(sink.frames.is_empty());
        assert_eq!(game.state().time_ticks, 0);
        assert_eq!(game.phase(), LoopPhase::NotStarted);
    }

    #[test]
    fn test_step_renders_each_tick_and_reports_score() {
        let mut game = GameLoop::new(&corridor(TilePos::new(1, 7))).unwrap();
        let mut sink = Recorder::default();
        game.start();
        assert!(game.step(&mut sink));
        assert_eq!(sink.frames, vec![(1, 10, Outcome::InProgress)]);
        assert_eq!(sink.scores, vec![10]);
    }

    #[test]
    fn test_advance_runs_whole_ticks_and_renders_once() {
        let mut game = GameLoop::new(&corridor(TilePos::new(1, 7))).unwrap();
        let mut sink = Recorder::default();
        game.start();

        assert_eq!(game.advance(SIM_DT * 0.5, &mut sink), 0);
        assert_eq!(game.advance(SIM_DT * 2.0, &mut sink), 2);
        assert_eq!(game.state().time_ticks, 2);
        assert_eq!(sink.frames.len(), 2);

        let ran = game.advance(5.0, &mut sink);
        assert!(ran >= 5 && ran <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_latest_input_is_applied() {
        let mut game = GameLoop::new(&corridor(TilePos::new(1, 7))).unwrap();
        let mut sink = Recorder::default();
        game.start();
        game.set_desired_direction(Direction::West);
        game.set_desired_direction(Direction::East);
        game.step(&mut sink);
        assert_eq!(game.state().player.agent.dir, Direction::East);
    }

    #[test]
    fn test_ended_loop_is_frozen() {
        let mut game = GameLoop::new(&corridor(TilePos::new(1, 1))).unwrap();
        let mut sink = Recorder::default();
        game.start();
        assert!(game.step(&mut sink));
        assert_eq!(game.phase(), LoopPhase::Ended);
        assert_eq!(sink.frames, vec![(1, 10, Outcome::Lost)]);

        game.set_desired_direction(Direction::East);
        assert!(!game.step(&mut sink));
        assert_eq!(game.advance(1.0, &mut sink), 0);
        game.start();
        assert_eq!(game.phase(), LoopPhase::Ended);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(game.state().time_ticks, 1);
    }
}
