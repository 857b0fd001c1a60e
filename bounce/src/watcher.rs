//! # Scene Hot-Reloading
//!
//! Watches a scene file for changes with [`notify`]. Many editors save by
//! writing a temporary file and renaming it over the original, so the
//! watcher observes the parent directory and filters events by file name.
//!
//! Events are forwarded over a channel; the tick loop drains it between
//! ticks through [`SceneWatcher::changed`].

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use tracing::{error, info};

pub struct SceneWatcher {
    // dropping the watcher stops event delivery
    _watcher: RecommendedWatcher,
    events: Receiver<()>,
}

impl SceneWatcher {
    /// Starts watching `scene`.
    ///
    /// # Errors
    ///
    /// Fails if the watcher cannot be created or the scene's directory
    /// cannot be watched.
    pub fn start(scene: &Path) -> Result<Self> {
        let file_name = scene
            .file_name()
            .map(OsString::from)
            .with_context(|| format!("{} does not name a file", scene.display()))?;
        let directory = watched_directory(scene);

        let (tx, events) = channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_scene_change(&event, &file_name) {
                    // receiver gone means the run is over
                    let _ = tx.send(());
                }
            }
            Err(e) => error!("Error watching scene file: {e:?}"),
        })
        .context("failed to create scene watcher")?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", directory.display()))?;
        info!("Scene watcher active for {}", scene.display());

        Ok(Self {
            _watcher: watcher,
            events,
        })
    }

    /// True if the scene changed since the last call.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while self.events.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

fn watched_directory(scene: &Path) -> PathBuf {
    match scene.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn is_scene_change(event: &Event, file_name: &OsString) -> bool {
    (event.kind.is_modify() || event.kind.is_create())
        && event
            .paths
            .iter()
            .any(|path| path.file_name() == Some(file_name.as_os_str()))
}
