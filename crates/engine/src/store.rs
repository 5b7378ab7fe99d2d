//! Bounded, ordered word buffer
//!
//! Insertion order is preserved; words are never reordered or deduplicated.
//! Positions are 1-based, matching the protocol's `query` contract.

use wordvault_core::StoreLimits;

/// The capacity-bounded buffer of accepted words.
///
/// Owned exclusively by the storage engine; callers only ever see cloned
/// snapshots.
#[derive(Debug)]
pub struct WordStore {
    words: Vec<String>,
    capacity: usize,
}

impl WordStore {
    /// Create an empty store with the given limits.
    pub fn new(limits: StoreLimits) -> Self {
        WordStore {
            words: Vec::with_capacity(limits.capacity),
            capacity: limits.capacity,
        }
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the store holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether the store is at capacity.
    pub fn is_full(&self) -> bool {
        self.words.len() == self.capacity
    }

    /// The fixed capacity of this store.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a word.
    ///
    /// Callers must check [`is_full`](Self::is_full) first; pushing past
    /// capacity is a logic error in the engine, not a protocol outcome.
    pub fn push(&mut self, word: &str) {
        debug_assert!(!self.is_full(), "push into a full store");
        self.words.push(word.to_string());
    }

    /// Word at the 1-based `position`, or `None` when out of range.
    pub fn get(&self, position: i64) -> Option<&str> {
        if position < 1 {
            return None;
        }
        self.words
            .get(position as usize - 1)
            .map(String::as_str)
    }

    /// Remove every word.
    pub fn wipe(&mut self) {
        self.words.clear();
    }

    /// Cloned view of the stored words, in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.words.clone()
    }
}
