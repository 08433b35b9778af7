//! High-score list - top entries kept in descending order

use crate::types::HIGH_SCORE_COUNT;

/// The top [`HIGH_SCORE_COUNT`] scores, highest first.
///
/// Empty slots hold zero, so a fresh list reads `[0, 0, 0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HighScores {
    scores: [u32; HIGH_SCORE_COUNT],
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from arbitrary stored values.
    ///
    /// Values are sorted descending and truncated; missing entries become zero.
    pub fn from_slice(values: &[u32]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut scores = [0u32; HIGH_SCORE_COUNT];
        for (slot, value) in scores.iter_mut().zip(sorted) {
            *slot = value;
        }
        Self { scores }
    }

    /// Insert a finished game's score.
    ///
    /// Returns the zero-based rank the score took, or `None` if it did not beat
    /// any entry. Ties rank below the existing entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::HighScores;
    ///
    /// let mut scores = HighScores::from_slice(&[50, 30, 10]);
    /// assert_eq!(scores.insert(40), Some(1));
    /// assert_eq!(scores.as_slice(), &[50, 40, 30]);
    /// ```
    pub fn insert(&mut self, score: u32) -> Option<usize> {
        let rank = self.scores.iter().filter(|&&s| s >= score).count();
        if rank >= HIGH_SCORE_COUNT {
            return None;
        }

        self.scores[rank..].rotate_right(1);
        self.scores[rank] = score;
        Some(rank)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.scores
    }

    pub fn best(&self) -> u32 {
        self.scores[0]
    }
}
