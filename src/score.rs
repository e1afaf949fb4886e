//! Score tracking
//!
//! Kept in memory for the lifetime of the process; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Current session score and the best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    /// Pipes passed in the running session
    pub current: u32,
    /// Best finished session, never decreases
    pub best: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one passed pipe pair
    pub fn record_pass(&mut self) {
        self.current += 1;
    }

    /// Fold the current score into the best score (on game over).
    /// Returns true if this was a new best.
    pub fn finish_session(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }

    /// Start a new session, keeping the best score
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_is_monotonic() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.record_pass();
        }
        assert!(score.finish_session());
        assert_eq!(score.best, 5);

        score.reset_current();
        score.record_pass();
        assert!(!score.finish_session());
        assert_eq!(score.current, 1);
        assert_eq!(score.best, 5);
    }

    #[test]
    fn test_equal_score_is_not_new_best() {
        let mut score = Score { current: 3, best: 3 };
        assert!(!score.finish_session());
        assert_eq!(score.best, 3);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut score = Score { current: 7, best: 9 };
        score.reset_current();
        assert_eq!(score, Score { current: 0, best: 9 });
    }
}
