//! File-backed storage: one JSON blob per key under a data directory
//!
//! The root directory comes from `GUIDEPOST_ROOT` when set, otherwise the
//! platform data dir. Each app gets its own subdirectory so several apps can
//! share a machine without clashing.

use std::fs;
use std::path::PathBuf;

use super::{Storage, StorageError};

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open(app: &str) -> Result<Self, StorageError> {
        let root = match std::env::var("GUIDEPOST_ROOT") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("guidepost"),
        };
        Self::open_in(root.join(app))
    }

    /// Open against an explicit directory (tests use a tempdir here).
    pub fn open_in(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are short identifiers; anything unexpected becomes '_'.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
