//! # Tick Loop
//!
//! Builds an [`Engine`] from the selected scene and drives it for the
//! requested number of ticks. Collisions and per-tick summaries go to
//! `tracing` at `DEBUG` through [`TracingObserver`]; progress lines are
//! logged at `INFO` every `log_every` ticks.
//!
//! When watching, a changed scene file replaces the running engine on the
//! next tick. A scene that fails to load is logged and the previous engine
//! keeps running.

use anyhow::{bail, Result};
use kinetics::{CollisionConfig, Engine, RunSummary, TracingObserver};
use scene::Scene;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::watcher::SceneWatcher;

pub struct Options {
    pub scene: Option<PathBuf>,
    pub steps: usize,
    pub dt: f32,
    pub fps: Option<f32>,
    pub watch: bool,
    pub log_every: u64,
    pub config_override: Option<CollisionConfig>,
}

impl Options {
    fn frame_duration(&self) -> Result<Option<Duration>> {
        match self.fps {
            None => Ok(None),
            Some(fps) if fps.is_finite() && fps > 0.0 => {
                match Duration::try_from_secs_f32(fps.recip()) {
                    Ok(frame) => Ok(Some(frame)),
                    Err(e) => bail!("--fps {fps} gives an unusable frame duration: {e}"),
                }
            }
            Some(fps) => bail!("--fps must be positive, got {fps}"),
        }
    }

    fn load_engine(&self) -> Result<Engine> {
        let mut scene = match &self.scene {
            Some(path) => Scene::from_path(path)?,
            None => Scene::demo(),
        };
        if let Some(config) = self.config_override {
            scene.config = config;
        }
        scene.into_engine()
    }
}

/// Runs the configured scene and returns the tick totals.
///
/// # Errors
///
/// Fails if the initial scene cannot be loaded, the watcher cannot start,
/// or a tick is rejected by the engine.
pub fn run(options: &Options) -> Result<RunSummary> {
    let frame_duration = options.frame_duration()?;
    let mut engine = options.load_engine()?;
    let source = options
        .scene
        .as_ref()
        .map_or_else(|| "demo".to_owned(), |p| p.display().to_string());
    info!(bodies = engine.len(), scene = %source, "scene loaded");

    let watcher = match (&options.scene, options.watch) {
        (Some(path), true) => Some(SceneWatcher::start(path)?),
        _ => None,
    };

    info!(
        steps = options.steps,
        dt = options.dt,
        "starting simulation loop"
    );
    let mut observer = TracingObserver;
    let mut summary = RunSummary::default();
    for _ in 0..options.steps {
        let frame_start = Instant::now();

        if watcher.as_ref().is_some_and(SceneWatcher::changed) {
            match options.load_engine() {
                Ok(reloaded) => {
                    info!(bodies = reloaded.len(), "scene reloaded");
                    engine = reloaded;
                }
                Err(e) => warn!("keeping previous scene: {e:#}"),
            }
        }

        let report = engine.step_observed(options.dt, &mut observer)?;
        summary.absorb(&report);

        if options.log_every > 0 && report.tick % options.log_every == 0 {
            log_progress(&engine, &summary);
        }

        if let Some(frame_duration) = frame_duration {
            let frame_time = frame_start.elapsed();
            if frame_time < frame_duration {
                std::thread::sleep(frame_duration - frame_time);
            }
        }
    }

    info!(
        ticks = summary.ticks,
        pairs = summary.pairs_tested,
        collisions = summary.collisions,
        "simulation loop finished"
    );
    for (_, body) in engine.bodies() {
        info!(
            code = body.code(),
            position = ?body.position,
            velocity = ?body.velocity,
            "final state"
        );
    }
    Ok(summary)
}

fn log_progress(engine: &Engine, summary: &RunSummary) {
    let energy: f32 = engine
        .bodies()
        .map(|(_, body)| body.kinetic_energy())
        .sum();
    info!(
        tick = engine.ticks(),
        collisions = summary.collisions,
        kinetic_energy = energy,
        "simulation step complete"
    );
}
