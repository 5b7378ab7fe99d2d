//! Mirror persistence - an in-memory copy of the word buffer
//!
//! Appends on `Some(word)`, empties on `None`. Because the engine notifies
//! inside its locked verb execution, the mirror observes mutations in the
//! exact order the store applied them.

use parking_lot::Mutex;
use wordvault_core::PersistenceAdapter;

/// Persistence adapter that mirrors the word buffer in memory.
#[derive(Debug, Default)]
pub struct MirrorPersistence {
    entries: Mutex<Vec<String>>,
}

impl MirrorPersistence {
    /// Create an empty mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cloned view of the mirrored buffer, in notification order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of mirrored words.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check whether the mirror is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl PersistenceAdapter for MirrorPersistence {
    fn notify(&self, value: Option<&str>) {
        let mut entries = self.entries.lock();
        match value {
            Some(word) => entries.push(word.to_string()),
            None => entries.clear(),
        }
    }

    fn name(&self) -> &'static str {
        "Mirror"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_in_order() {
        let mirror = MirrorPersistence::new();
        mirror.notify(Some("a"));
        mirror.notify(Some("b"));
        assert_eq!(mirror.entries(), vec!["a", "b"]);
        assert_eq!(mirror.len(), 2);
    }

    #[test]
    fn test_none_clears() {
        let mirror = MirrorPersistence::new();
        mirror.notify(Some("a"));
        mirror.notify(None);
        assert!(mirror.is_empty());
    }

    #[test]
    fn test_clear_then_append_again() {
        let mirror = MirrorPersistence::new();
        mirror.notify(Some("a"));
        mirror.notify(None);
        mirror.notify(Some("b"));
        assert_eq!(mirror.entries(), vec!["b"]);
    }
}
