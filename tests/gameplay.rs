//! End to end games driven through the public API

use maze_chase::config::{AgentConfig, PursuerConfig};
use maze_chase::renderer::{RenderSink, Snapshot};
use maze_chase::sim::{Autopilot, Direction, GameEvent, Outcome, TilePos};
use maze_chase::{GameConfig, GameLoop, LoopPhase};

#[derive(Default)]
struct Recorder {
    frames: u64,
    scores: Vec<u32>,
    events: Vec<GameEvent>,
    last_outcome: Outcome,
}

impl RenderSink for Recorder {
    fn render(&mut self, frame: &Snapshot<'_>) {
        self.frames += 1;
        self.events.extend(frame.events.iter().cloned());
        self.last_outcome = frame.outcome;
    }

    fn score_changed(&mut self, score: u32) {
        self.scores.push(score);
    }
}

fn config(layout: &[&str], player: TilePos, pursuer: TilePos, pursuer_speed: f32) -> GameConfig {
    GameConfig {
        layout: layout.iter().map(|row| row.to_string()).collect(),
        player: AgentConfig {
            start: player,
            speed: 3.0,
            radius: 11.2,
        },
        pursuer: PursuerConfig {
            start: pursuer,
            speed: pursuer_speed,
            radius: 11.2,
            color: "#FF2D55".to_string(),
        },
        ..GameConfig::default()
    }
}

#[test]
fn test_autopilot_clears_board_around_frozen_pursuer() {
    let config = config(
        &["#####", "# ..#", "#...#", "#...#", "#####"],
        TilePos::new(2, 2),
        TilePos::new(1, 1),
        0.0,
    );
    let mut game = GameLoop::new(&config).unwrap();
    let pursuer_start = game.state().pursuer.agent.pos;
    let autopilot = Autopilot::default();
    let mut sink = Recorder::default();

    game.start();
    while game.phase() == LoopPhase::Running && game.state().time_ticks < 2_000 {
        game.set_desired_direction(autopilot.steer(game.state()));
        game.step(&mut sink);
    }

    let state = game.state();
    assert_eq!(game.phase(), LoopPhase::Ended);
    assert_eq!(state.outcome, Outcome::Won);
    assert_eq!(state.score, 80);
    assert_eq!(state.grid.remaining_collectible_count(), 0);
    assert_eq!(state.pursuer.agent.pos, pursuer_start);

    assert_eq!(sink.scores, vec![10, 20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(sink.last_outcome, Outcome::Won);
    let eaten = sink
        .events
        .iter()
        .filter(|event| matches!(event, GameEvent::PelletEaten { .. }))
        .count();
    assert_eq!(eaten, 8);
    assert_eq!(sink.frames, state.time_ticks);
}

#[test]
fn test_scripted_corridor_run_wins() {
    let config = config(
        &["#######", "#  ...#", "#######"],
        TilePos::new(1, 3),
        TilePos::new(1, 1),
        0.0,
    );
    let mut game = GameLoop::new(&config).unwrap();
    let mut sink = Recorder::default();
    game.start();
    game.set_desired_direction(Direction::East);

    let mut ticks = 0;
    while game.step(&mut sink) {
        ticks += 1;
        assert!(ticks < 100, "corridor run never finished");
    }

    assert_eq!(game.state().outcome, Outcome::Won);
    assert_eq!(game.state().score, 30);
    // Pellet at column 5 is entered once the center crosses x = 140
    assert_eq!(game.state().player.agent.pos.y, 42.0);
    assert!(game.state().player.agent.pos.x >= 140.0);
}

#[test]
fn test_shared_start_tile_is_caught_on_first_tick() {
    let config = config(
        &["#####", "#...#", "#####"],
        TilePos::new(1, 2),
        TilePos::new(1, 2),
        2.2,
    );
    let mut game = GameLoop::new(&config).unwrap();
    let mut sink = Recorder::default();
    game.start();
    assert!(game.step(&mut sink));

    assert_eq!(game.phase(), LoopPhase::Ended);
    assert_eq!(game.state().outcome, Outcome::Lost);
    assert!(sink.events.contains(&GameEvent::OutcomeChanged {
        outcome: Outcome::Lost
    }));
}

#[test]
fn test_ended_game_ignores_time_and_input() {
    let config = config(
        &["#####", "#...#", "#####"],
        TilePos::new(1, 1),
        TilePos::new(1, 1),
        0.0,
    );
    let mut game = GameLoop::new(&config).unwrap();
    let mut sink = Recorder::default();
    game.start();
    game.advance(0.05, &mut sink);
    assert_eq!(game.phase(), LoopPhase::Ended);

    let before = game.state().clone();
    let frames = sink.frames;
    for dir in Direction::CARDINALS {
        game.set_desired_direction(dir);
        assert_eq!(game.advance(0.1, &mut sink), 0);
        assert!(!game.step(&mut sink));
    }
    let after = game.state();
    assert_eq!(after.time_ticks, before.time_ticks);
    assert_eq!(after.player.agent, before.player.agent);
    assert_eq!(after.pursuer.agent, before.pursuer.agent);
    assert_eq!(after.score, before.score);
    assert_eq!(sink.frames, frames);
}

#[test]
fn test_default_level_runs_headless() {
    let mut game = GameLoop::new(&GameConfig::default().with_seed(7)).unwrap();
    let autopilot = Autopilot::default();
    let mut sink = Recorder::default();
    game.start();
    while game.phase() == LoopPhase::Running && game.state().time_ticks < 3_000 {
        game.set_desired_direction(autopilot.steer(game.state()));
        game.step(&mut sink);
    }

    let state = game.state();
    let eaten = state.grid.total_collectibles() - state.grid.remaining_collectible_count();
    assert_eq!(state.score as usize, eaten * 10);
    assert!(eaten > 0);
}
