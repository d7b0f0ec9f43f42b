//! Progress persistence.
//!
//! The store wraps the pure [`Progress`] reducer with a persistence
//! adapter: every transition is applied in memory first, then written
//! out atomically. Storage failures are logged and swallowed; the
//! session keeps running on in-memory state.

use std::fs;
use std::path::{Path, PathBuf};

use godel_types::{Progress, ScenarioId};
use godel_utils::atomic_write;
use tracing::{debug, warn};

const PROGRESS_FILE: &str = "progress.json";

#[derive(Debug)]
pub struct ProgressStore {
    progress: Progress,
    /// None = ephemeral store (tests, or no resolvable data dir).
    path: Option<PathBuf>,
}

impl ProgressStore {
    /// Open the store backed by `dir/progress.json`, loading any saved
    /// progress. A missing file yields defaults; a corrupt file is
    /// logged and replaced on the next write.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(PROGRESS_FILE);
        let progress = load(&path);
        Self {
            progress,
            path: Some(path),
        }
    }

    /// A store that never touches disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Progress::default(),
            path: None,
        }
    }

    /// Default storage directory: `~/.godelarium`.
    #[must_use]
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".godelarium"))
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn unlock(&mut self, id: ScenarioId) {
        self.progress.unlock(id);
        self.persist();
    }

    pub fn complete(&mut self, id: ScenarioId) {
        self.progress.complete(id);
        self.persist();
    }

    pub fn reset(&mut self) {
        self.progress.reset();
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Err(err) = save(&self.progress, path) {
            warn!(path = %path.display(), "failed to persist progress: {err}");
        }
    }
}

fn load(path: &Path) -> Progress {
    if !path.exists() {
        return Progress::default();
    }
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(progress) => {
                debug!(path = %path.display(), "loaded progress");
                progress
            }
            Err(err) => {
                warn!(path = %path.display(), "corrupt progress file, using defaults: {err}");
                Progress::default()
            }
        },
        Err(err) => {
            warn!(path = %path.display(), "failed to read progress file: {err}");
            Progress::default()
        }
    }
}

fn save(progress: &Progress, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(progress)?;
    atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProgressStore::open(dir.path());
        store.complete(ScenarioId::Factory);
        store.unlock(ScenarioId::Kingdom);

        let reloaded = ProgressStore::open(dir.path());
        assert_eq!(reloaded.progress(), store.progress());
        assert!(reloaded.progress().is_completed(ScenarioId::Factory));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::open(dir.path());
        assert_eq!(store.progress(), &Progress::default());
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROGRESS_FILE), b"{not json").unwrap();
        let store = ProgressStore::open(dir.path());
        assert_eq!(store.progress(), &Progress::default());
    }

    #[test]
    fn reset_persists_the_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ProgressStore::open(dir.path());
        store.complete(ScenarioId::Detective);
        store.reset();

        let reloaded = ProgressStore::open(dir.path());
        assert_eq!(reloaded.progress(), &Progress::default());
    }

    #[test]
    fn in_memory_store_never_writes() {
        let mut store = ProgressStore::in_memory();
        store.complete(ScenarioId::Paradox);
        assert!(store.progress().is_completed(ScenarioId::Paradox));
    }
}
