//! High score tracking
//!
//! Loaded once at startup, written only at round end and only when the
//! finished round beats the stored score.

use crate::persistence::{HighScoreStore, PersistenceError};

/// Best score so far, backed by a store
#[derive(Debug)]
pub struct HighScore<S: HighScoreStore> {
    store: S,
    best: u64,
}

impl<S: HighScoreStore> HighScore<S> {
    /// Read the stored score (0 if absent or unreadable)
    pub fn load(store: S) -> Self {
        let best = store.load_high_score();
        Self { store, best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score beats the stored one
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished round.
    ///
    /// Returns `Ok(true)` when the score was a new best and was written.
    pub fn submit(&mut self, score: u64) -> Result<bool, PersistenceError> {
        if !self.qualifies(score) {
            return Ok(false);
        }
        self.store.save_high_score(score)?;
        log::info!("New high score: {} (was {})", score, self.best);
        self.best = score;
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_loads_stored_value() {
        let scores = HighScore::load(MemoryStore {
            value: Some(30),
            writes: 0,
        });
        assert_eq!(scores.best(), 30);
        assert!(!scores.qualifies(30));
        assert!(scores.qualifies(31));
    }

    #[test]
    fn test_written_only_on_strict_improvement() {
        let mut scores = HighScore::load(MemoryStore {
            value: Some(50),
            writes: 0,
        });

        assert!(!scores.submit(10).expect("submit"));
        assert!(!scores.submit(50).expect("submit"));
        assert_eq!(scores.store().writes, 0);
        assert_eq!(scores.store().value, Some(50));

        assert!(scores.submit(51).expect("submit"));
        assert_eq!(scores.store().writes, 1);
        assert_eq!(scores.store().value, Some(51));
        assert_eq!(scores.best(), 51);

        assert!(!scores.submit(51).expect("submit"));
        assert_eq!(scores.store().writes, 1);
    }

    #[test]
    fn test_zero_never_written_to_empty_store() {
        let mut scores = HighScore::load(MemoryStore::default());
        assert_eq!(scores.best(), 0);
        assert!(!scores.submit(0).expect("submit"));
        assert_eq!(scores.store().writes, 0);
    }
}
