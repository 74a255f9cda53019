//! High score storage
//!
//! Features:
//! - Single decimal integer in a text file
//! - Missing or malformed file reads as 0
//! - Writes go to a temp file first, then replace the save (tmp → save)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while saving a high score
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the high score lives between runs
pub trait HighScoreStore {
    /// Stored high score, 0 when there is none
    fn load_high_score(&self) -> u64;

    /// Overwrite the stored high score
    fn save_high_score(&mut self, value: u64) -> Result<(), PersistenceError>;
}

/// Plain-text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HighScoreStore for FileStore {
    fn load_high_score(&self) -> u64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", self.path.display(), e);
                return 0;
            }
        };

        match text.trim().parse::<u64>() {
            Ok(value) => {
                log::info!("Loaded high score {} from {}", value, self.path.display());
                value
            }
            Err(e) => {
                log::warn!("Ignoring malformed high score in {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, value: u64) -> Result<(), PersistenceError> {
        let tmp = self.tmp_path();
        let write = |path: &Path, source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&tmp, value.to_string()).map_err(|e| write(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| write(&self.path, e))?;
        log::info!("High score {} saved to {}", value, self.path.display());
        Ok(())
    }
}

/// In-process store, for tests and sessions that shouldn't touch disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
    /// Number of successful saves
    pub writes: usize,
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u64 {
        self.value.unwrap_or(0)
    }

    fn save_high_score(&mut self, value: u64) -> Result<(), PersistenceError> {
        self.value = Some(value);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fresh path under the system temp dir
    fn scratch_path(tag: &str) -> PathBuf {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "brick-by-brick-{}-{}-{}",
            tag,
            std::process::id(),
            n
        ));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir.join("highscore.txt")
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn test_malformed_file_reads_zero() {
        let path = scratch_path("malformed");
        fs::write(&path, "not a number").expect("write");
        assert_eq!(FileStore::new(&path).load_high_score(), 0);

        fs::write(&path, "-12").expect("write");
        assert_eq!(FileStore::new(&path).load_high_score(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("roundtrip");
        let mut store = FileStore::new(&path);
        store.save_high_score(1234).expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read"), "1234");
        assert_eq!(store.load_high_score(), 1234);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_trailing_newline_accepted() {
        let path = scratch_path("newline");
        fs::write(&path, "88\n").expect("write");
        assert_eq!(FileStore::new(&path).load_high_score(), 88);
    }

    #[test]
    fn test_write_error_reports_path() {
        let dir = scratch_path("baddir");
        // A path whose parent is a regular file can't be written
        fs::write(&dir, "0").expect("write");
        let mut store = FileStore::new(dir.join("nested.txt"));
        let err = store.save_high_score(5).unwrap_err();
        assert!(err.to_string().contains("nested.txt"));
    }
}
