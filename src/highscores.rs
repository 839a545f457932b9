//! High score tracking
//!
//! A single best score, read once at startup and written only when beaten.

use crate::platform::storage::{ScoreStore, parse_high_score};

/// The best score so far plus where it is persisted
#[derive(Debug, Clone)]
pub struct HighScore<S: ScoreStore> {
    best: u64,
    store: S,
}

impl<S: ScoreStore> HighScore<S> {
    /// Read the stored value (missing or malformed reads as 0)
    pub fn load(store: S) -> Self {
        let best = parse_high_score(store.read().as_deref());
        log::info!("High score loaded: {}", best);
        Self { best, store }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// A score only counts as a record if it strictly beats the best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished session's score. Returns true on a new record.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        match self.store.write(&score.to_string()) {
            Ok(()) => log::info!("New high score saved: {}", score),
            Err(e) => log::warn!("New high score {} not saved: {}", score, e),
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
