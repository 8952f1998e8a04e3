//! Runs a fake game loop on the system clock and logs what the timer tells it to do.
mod game;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::*;

use tempo_timer::{SystemClock, TimerConfig};

use crate::game::DemoGame;

#[derive(Parser, Debug)]
#[command(name = "tempo-demo")]
#[command(about = "Drive a fixed-timestep timer from a simulated game loop", long_about = None)]
struct Cli {
    /// JSON timer config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulation ticks per second
    #[arg(long)]
    tps: Option<f64>,

    /// Simulation speed multiplier (0 pauses)
    #[arg(long)]
    timescale: Option<f64>,

    /// Most ticks to run in one frame (0 for the default of 5 seconds' worth)
    #[arg(long)]
    max_ticks: Option<u32>,

    /// Milliseconds to sleep between frames
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,

    /// Seconds to run for
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,
}

fn load_config(cli: &Cli) -> Result<TimerConfig> {
    let mut config = match &cli.config {
        Some(path) => TimerConfig::load(path)
            .with_context(|| format!("Loading timer config from {}", path.display()))?,
        None => TimerConfig::new(2.0),
    };

    if let Some(tps) = cli.tps {
        config.ticks_per_second = tps;
    }
    if let Some(timescale) = cli.timescale {
        config.timescale = Some(timescale);
    }
    if let Some(max_ticks) = cli.max_ticks {
        config.max_tick_count = Some(max_ticks);
    }

    Ok(config)
}

fn main() -> Result<()> {
    tempo_logging::log_to_stderr();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut timer = config
        .to_builder()
        .build(SystemClock::new())
        .context("Building timer")?;
    info!(
        "Running at {} ticks per second for {} seconds",
        timer.get_ticks_per_second(),
        cli.seconds
    );

    let mut game = DemoGame::new();
    let frame_sleep = Duration::from_millis(cli.frame_ms);
    let run_for = Duration::try_from_secs_f64(cli.seconds).context("Invalid --seconds")?;
    let deadline = Instant::now() + run_for;

    while Instant::now() < deadline {
        game.run_frame(&mut timer);
        // Simulate polling events.
        std::thread::sleep(frame_sleep);
    }

    info!(
        "Done: {} ticks over {} frames, {} FPS windows, last alpha {:.3}",
        game.game_ticks,
        game.frames_rendered,
        game.fps_reports.len(),
        game.last_alpha
    );
    Ok(())
}
