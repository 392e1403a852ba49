//! Best-score persistence: one integer per fixed key name.

use crate::core::constants::SCORES_FILE;
use crate::utils::persistence::{load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// Key-value store for the best score. `set` failures are the store's problem:
/// they are logged, never surfaced to the game.
pub trait HighScoreStore {
    fn get(&self) -> Option<u32>;
    fn set(&mut self, score: u32);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    /// RFC 3339 timestamp of when the record was set.
    pub updated_at: String,
}

/// `scores.json` in the data directory, a map of key name to [`ScoreRecord`].
/// Other keys in the file (other skins) are preserved on write.
pub struct FileHighScoreStore {
    dir: PathBuf,
    key: String,
}

impl FileHighScoreStore {
    pub fn new(dir: impl Into<PathBuf>, key: &str) -> Self {
        Self {
            dir: dir.into(),
            key: key.to_string(),
        }
    }

    fn load_all(&self) -> BTreeMap<String, ScoreRecord> {
        load_json_or_default(&self.dir, SCORES_FILE)
    }

    fn write(&self, score: u32) -> io::Result<()> {
        let mut all = self.load_all();
        all.insert(
            self.key.clone(),
            ScoreRecord {
                score,
                updated_at: chrono::Utc::now().to_rfc3339(),
            },
        );
        save_json(&self.dir, SCORES_FILE, &all)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn get(&self) -> Option<u32> {
        self.load_all().get(&self.key).map(|r| r.score)
    }

    fn set(&mut self, score: u32) {
        match self.write(score) {
            Ok(()) => log::info!("new best score {} saved under {}", score, self.key),
            Err(e) => log::warn!("could not save best score {}: {}", score, e),
        }
    }
}

/// In-memory store. Used when no data directory is available, and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub value: Option<u32>,
    /// Every value passed to `set`, in order.
    pub writes: Vec<u32>,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get(&self) -> Option<u32> {
        self.value
    }

    fn set(&mut self, score: u32) {
        self.value = Some(score);
        self.writes.push(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::scratch_dir;

    #[test]
    fn test_missing_file_is_absent() {
        let dir = scratch_dir("hs_missing");
        let store = FileHighScoreStore::new(&dir, "clumsyBirdHighScore");
        assert_eq!(store.get(), None);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_set_then_get() {
        let dir = scratch_dir("hs_roundtrip");
        let mut store = FileHighScoreStore::new(&dir, "clumsyBirdHighScore");
        store.set(17);
        assert_eq!(store.get(), Some(17));

        // Survives a fresh handle, i.e. a process restart
        let reopened = FileHighScoreStore::new(&dir, "clumsyBirdHighScore");
        assert_eq!(reopened.get(), Some(17));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_keys_do_not_clobber_each_other() {
        let dir = scratch_dir("hs_keys");
        let mut classic = FileHighScoreStore::new(&dir, "clumsyBirdHighScore");
        let mut degen = FileHighScoreStore::new(&dir, "clumsyDegenHighScore");
        classic.set(4);
        degen.set(40);
        assert_eq!(classic.get(), Some(4));
        assert_eq!(degen.get(), Some(40));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_memory_store_records_writes() {
        let mut store = MemoryHighScoreStore::default();
        store.set(3);
        store.set(8);
        assert_eq!(store.get(), Some(8));
        assert_eq!(store.writes, vec![3, 8]);
    }
}
