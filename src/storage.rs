use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Where the best score survives between runs.
/// Both operations are best-effort: reads fall back to 0, failed writes are dropped.
pub trait HighScoreStore: Send {
    fn read_high_score(&self) -> u32;
    fn write_high_score(&mut self, score: u32);
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk layout of the high score file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
    pub recorded_at: DateTime<Utc>,
}

/// Keeps the high score in a small JSON file.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HighScoreRecord, StorageError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, score: u32) -> Result<(), StorageError> {
        let record = HighScoreRecord {
            high_score: score,
            recorded_at: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_vec_pretty(&record)?)?;
        Ok(())
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn read_high_score(&self) -> u32 {
        match self.load() {
            Ok(record) => record.high_score,
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No high score at {}, starting from 0", self.path.display());
                0
            }
            Err(e) => {
                warn!("Ignoring high score at {}: {e}", self.path.display());
                0
            }
        }
    }

    fn write_high_score(&mut self, score: u32) {
        if let Err(e) = self.save(score) {
            warn!("Could not save high score {score} to {}: {e}", self.path.display());
        }
    }
}

/// Process-local store. Clones share the same value, so a test can keep one
/// handle and give the other to the game.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    value: Arc<Mutex<u32>>,
}

impl MemoryHighScoreStore {
    pub fn new(initial: u32) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn read_high_score(&self) -> u32 {
        self.value.lock().map(|v| *v).unwrap_or(0)
    }

    fn write_high_score(&mut self, score: u32) {
        if let Ok(mut value) = self.value.lock() {
            *value = score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHighScoreStore::new(dir.path().join("missing.json"));
        assert_eq!(store.read_high_score(), 0);
    }

    #[test]
    fn test_corrupt_file_reads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "not a number").unwrap();
        let store = FileHighScoreStore::new(&path);
        assert_eq!(store.read_high_score(), 0);
    }

    #[test]
    fn test_written_score_is_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        let mut store = FileHighScoreStore::new(&path);
        store.write_high_score(40);

        let reopened = FileHighScoreStore::new(&path);
        assert_eq!(reopened.read_high_score(), 40);

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["high_score"], 40);
        assert!(raw["recorded_at"].is_string(), "The record must carry a timestamp");
    }

    #[test]
    fn test_failed_write_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written over as a file.
        let mut store = FileHighScoreStore::new(dir.path());
        store.write_high_score(10);
        assert_eq!(store.read_high_score(), 0);
    }

    #[test]
    fn test_memory_store_clones_share_value() {
        let probe = MemoryHighScoreStore::new(30);
        let mut store = probe.clone();
        assert_eq!(store.read_high_score(), 30);
        store.write_high_score(55);
        assert_eq!(probe.read_high_score(), 55);
    }
}
