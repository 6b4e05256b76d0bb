//! Maze Chase entry point
//!
//! Runs the game headless: the autopilot plays, frames go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use maze_chase::consts::SIM_DT;
use maze_chase::renderer::{RenderSink, Snapshot, TextRenderer};
use maze_chase::sim::{Autopilot, Outcome};
use maze_chase::{ConfigError, GameConfig, GameLoop, LoopPhase};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Seed for the pursuer's RNG
    #[arg(long)]
    seed: Option<u64>,
    /// JSON game config; the classic level is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
    /// Print every Nth frame (0 prints only the final one)
    #[arg(long, default_value_t = 0)]
    frame_every: u64,
    /// Emit the summary as JSON instead of a text frame
    #[arg(long)]
    json: bool,
    /// Let the autopilot plan straight through the pursuer
    #[arg(long)]
    reckless: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    score: u32,
    remaining: usize,
    total: usize,
    outcome: Outcome,
}

/// Text renderer that also echoes selected frames to stdout
struct Console {
    text: TextRenderer,
    frame_every: u64,
}

impl RenderSink for Console {
    fn render(&mut self, frame: &Snapshot<'_>) {
        self.text.render(frame);
        if self.frame_every > 0 && frame.tick % self.frame_every == 0 {
            println!("{}\n", self.text.frame);
        }
    }

    fn score_changed(&mut self, score: u32) {
        self.text.score_changed(score);
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut game = GameLoop::new(&config)?;
    let autopilot = Autopilot {
        avoid_pursuer: !cli.reckless,
    };
    let mut console = Console {
        text: TextRenderer::new(),
        frame_every: if cli.json { 0 } else { cli.frame_every },
    };

    game.start();
    while game.phase() == LoopPhase::Running && game.state().time_ticks < cli.max_ticks {
        game.set_desired_direction(autopilot.steer(game.state()));
        game.advance(SIM_DT, &mut console);
    }

    let state = game.state();
    if game.phase() != LoopPhase::Ended {
        log::warn!("Stopped after {} ticks without an outcome", state.time_ticks);
    }

    let summary = Summary {
        seed: config.seed,
        ticks: state.time_ticks,
        score: console.text.score,
        remaining: state.grid.remaining_collectible_count(),
        total: state.grid.total_collectibles(),
        outcome: state.outcome,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", console.text.frame);
        println!(
            "seed {} | {:?} after {} ticks | score {} | {}/{} pellets left",
            summary.seed,
            summary.outcome,
            summary.ticks,
            summary.score,
            summary.remaining,
            summary.total
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Maze Chase (headless) starting...");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
