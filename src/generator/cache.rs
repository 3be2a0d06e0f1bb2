//! Survivor-count memoization
//!
//! During one `generate` call the same guess combinations recur across
//! attempts, because the first half of all attempts scans the same focused
//! pool. The cache remembers how many candidates survive a set of guesses
//! against the fixed answer, keyed by the sorted guess ids. It lives for a
//! single generation and is discarded afterwards.

use crate::core::WordId;
use rustc_hash::FxHashMap;

/// Maximum number of guesses a key can hold
const KEY_SLOTS: usize = 4;

/// Unused key slot marker; no real word id reaches it
const VACANT: WordId = WordId::MAX;

/// A set of up to four guess ids in canonical (sorted) order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GuessSet([WordId; KEY_SLOTS]);

impl GuessSet {
    /// Canonical key for `chosen` guesses plus one more candidate
    ///
    /// # Panics
    /// Panics if `chosen` already holds four guesses.
    pub(crate) fn new(chosen: &[WordId], next: WordId) -> Self {
        assert!(chosen.len() < KEY_SLOTS, "guess set can hold four ids");

        let mut ids = [VACANT; KEY_SLOTS];
        ids[..chosen.len()].copy_from_slice(chosen);
        ids[chosen.len()] = next;
        ids[..=chosen.len()].sort_unstable();
        Self(ids)
    }
}

/// Per-generation memo of guess-set survivor counts
#[derive(Debug, Default)]
pub(crate) struct FilterCache {
    counts: FxHashMap<GuessSet, usize>,
}

impl FilterCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, key: &GuessSet) -> Option<usize> {
        self.counts.get(key).copied()
    }

    pub(crate) fn insert(&mut self, key: GuessSet, survivors: usize) {
        self.counts.insert(key, survivors);
    }
}
