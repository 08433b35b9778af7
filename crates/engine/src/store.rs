//! Persistence seam for the high-score list.
//!
//! The session only talks to [`ScoreStore`]; the file-backed implementation
//! lives in its own crate so the engine stays free of I/O.

use anyhow::Result;

/// Key-value style storage for the top scores.
pub trait ScoreStore {
    /// Read the stored list. A missing entry is `Ok(vec![])`.
    fn load(&self) -> Result<Vec<u32>>;

    /// Replace the stored list.
    fn save(&mut self, scores: &[u32]) -> Result<()>;
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn load(&self) -> Result<Vec<u32>> {
        (**self).load()
    }

    fn save(&mut self, scores: &[u32]) -> Result<()> {
        (**self).save(scores)
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    scores: Vec<u32>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: &[u32]) -> Self {
        Self {
            scores: scores.to_vec(),
            saves: 0,
        }
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Number of successful `save` calls.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<u32>> {
        Ok(self.scores.clone())
    }

    fn save(&mut self, scores: &[u32]) -> Result<()> {
        self.scores = scores.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_counts_saves() {
        let mut store = MemoryStore::with_scores(&[3, 2]);
        assert_eq!(store.load().unwrap(), vec![3, 2]);

        store.save(&[9, 3, 2]).unwrap();
        assert_eq!(store.load().unwrap(), vec![9, 3, 2]);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryStore::new());
        store.save(&[1]).unwrap();
        assert_eq!(store.load().unwrap(), vec![1]);
    }
}
