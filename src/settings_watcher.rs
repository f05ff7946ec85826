//! Settings file watcher for hot reload.
//!
//! Watches the directory containing the settings file (editors often replace
//! the file instead of writing in place) and reports changes to that one path.
//! The host polls it once per loop iteration.

use crate::error::CanvasResult;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl std::fmt::Debug for SettingsWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWatcher")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> CanvasResult<Self> {
        let (tx, rx) = channel::<notify::Result<Event>>();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "watching settings file");

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next change to the settings file, if any. Never blocks; events for
    /// other files in the directory are skipped.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| self.is_settings_file(p)) {
                        continue;
                    }
                    match event.kind {
                        EventKind::Create(_) => return Some(SettingsEvent::Created),
                        EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                        EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                        _ => continue,
                    }
                }
                Ok(Err(err)) => {
                    warn!(%err, "settings watch error");
                    return Some(SettingsEvent::Error(err.to_string()));
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error("watcher disconnected".to_string()));
                }
            }
        }
    }

    fn is_settings_file(&self, candidate: &Path) -> bool {
        candidate == self.path || candidate.file_name() == self.path.file_name()
    }
}
