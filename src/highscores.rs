//! High score persistence port
//!
//! The session reads the stored best once at startup and writes it once
//! per game over that beats it, through an injected store rather than
//! ambient storage access.

use serde::{Deserialize, Serialize};

/// Storage port for the single persisted high score
pub trait HighScoreStore {
    /// Best score on record (0 when nothing is stored)
    fn high_score(&self) -> u64;
    /// Persist a new best. Non-improvements are ignored.
    fn record(&mut self, score: u64);
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScores {
    best: u64,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryHighScores {
    fn high_score(&self) -> u64 {
        self.best
    }

    fn record(&mut self, score: u64) {
        if score > self.best {
            self.best = score;
        }
    }
}

/// Persisted record, stored as JSON
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoredScore {
    pub score: u64,
}

/// Decode a raw stored value; absence and corruption both read as 0
pub fn parse_stored(raw: Option<String>) -> u64 {
    raw.and_then(|json| serde_json::from_str::<StoredScore>(&json).ok())
        .map(|record| record.score)
        .unwrap_or(0)
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageHighScores {
    best: u64,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageHighScores {
    const STORAGE_KEY: &'static str = "nova_raid_highscore";

    /// Read the stored best once; missing or unreadable storage yields 0
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        let raw = storage
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok())
            .flatten();
        let best = parse_stored(raw);
        log::info!("loaded high score: {}", best);
        Self { best }
    }

    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&StoredScore { score: self.best }) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("high score saved");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageHighScores {
    fn high_score(&self) -> u64 {
        self.best
    }

    fn record(&mut self, score: u64) {
        if score > self.best {
            self.best = score;
            self.save();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_keeps_only_improvements() {
        let mut store = MemoryHighScores::new();
        assert_eq!(store.high_score(), 0);

        store.record(300);
        assert_eq!(store.high_score(), 300);

        store.record(100);
        assert_eq!(store.high_score(), 300);

        store.record(301);
        assert_eq!(store.high_score(), 301);
    }

    #[test]
    fn missing_value_reads_as_zero() {
        assert_eq!(parse_stored(None), 0);
    }

    #[test]
    fn corrupt_value_reads_as_zero() {
        assert_eq!(parse_stored(Some("not json".to_string())), 0);
        assert_eq!(parse_stored(Some("{\"wrong\":true}".to_string())), 0);
    }

    #[test]
    fn stored_record_round_trips() {
        let json = serde_json::to_string(&StoredScore { score: 4200 }).unwrap();
        assert_eq!(parse_stored(Some(json)), 4200);
    }
}
