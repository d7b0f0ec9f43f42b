//! Atomic file write helper.
//!
//! Uses a temp file + rename pattern so readers never observe a
//! half-written progress file. On Windows, rename-over-existing can
//! fail, so an existing destination is moved aside to a `.bak` first
//! and restored if the rename does not go through.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// Write `bytes` to `path`, replacing any existing file atomically.
///
/// The temp file is created in the destination's parent directory so
/// the final rename never crosses a filesystem boundary.
pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    match tmp.persist(path) {
        Ok(_) => {
            best_effort_sync_parent_dir(parent);
            Ok(())
        }
        Err(err) => {
            // Windows fallback: move the destination aside, then retry.
            let backup = path.with_extension("bak");
            if path.exists() {
                std::fs::rename(path, &backup)?;
                match err.file.persist(path) {
                    Ok(_) => {
                        let _ = std::fs::remove_file(&backup);
                        Ok(())
                    }
                    Err(retry_err) => {
                        // Restore the original so no data is lost.
                        let _ = std::fs::rename(&backup, path);
                        Err(retry_err.error)
                    }
                }
            } else {
                Err(err.error)
            }
        }
    }
}

fn best_effort_sync_parent_dir(parent: &Path) {
    if let Err(e) = File::open(parent).and_then(|d| d.sync_all()) {
        debug!(path = %parent.display(), "parent directory sync failed (best-effort): {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::atomic_write;

    #[test]
    fn writes_a_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        atomic_write(&path, b"{}").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn replaces_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        atomic_write(&path, b"data").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
