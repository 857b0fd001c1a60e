//! # Bounce
//!
//! Headless runner for collision scenes. Loads a JSON scene (or the
//! built-in two-sphere demo), advances it a fixed number of ticks and logs
//! progress through `tracing`. With `--watch` the scene file is reloaded
//! whenever it changes on disk.

mod app;
mod watcher;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use kinetics::CollisionConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bounce", version, about)]
struct Cli {
    /// Scene file to load; the two-sphere demo runs when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Seconds per tick
    #[arg(long, default_value_t = 0.016)]
    dt: f32,

    /// Pace ticks to this many per wall-clock second
    #[arg(long)]
    fps: Option<f32>,

    /// Reload the scene file when it changes
    #[arg(long, requires = "scene")]
    watch: bool,

    /// Log a progress line every K ticks, 0 disables it
    #[arg(long, default_value_t = 50)]
    log_every: u64,

    /// Replace the scene's collision settings with a preset
    #[arg(long, value_enum)]
    preset: Option<Preset>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    Default,
    Legacy,
    Geometric,
}

impl Preset {
    fn config(self) -> CollisionConfig {
        match self {
            Preset::Default => CollisionConfig::default(),
            Preset::Legacy => CollisionConfig::legacy(),
            Preset::Geometric => CollisionConfig::geometric(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let options = app::Options {
        scene: cli.scene,
        steps: cli.steps,
        dt: cli.dt,
        fps: cli.fps,
        watch: cli.watch,
        log_every: cli.log_every,
        config_override: cli.preset.map(Preset::config),
    };
    app::run(&options)?;
    Ok(())
}
