//! Capacity configuration for the word store
//!
//! The shipped capacity is frozen at [`WORD_CAPACITY`]; custom limits exist so
//! tests can exercise boundary transitions without pushing five words first.

/// Default number of words a store accepts before lookup mode.
pub const WORD_CAPACITY: usize = 5;

/// Size limits for a word store.
#[derive(Debug, Clone)]
pub struct StoreLimits {
    /// Maximum number of stored words. Must be at least 1.
    pub capacity: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        StoreLimits {
            capacity: WORD_CAPACITY,
        }
    }
}

impl StoreLimits {
    /// Create limits with a custom capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "store capacity must be at least 1");
        StoreLimits { capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity_matches_protocol() {
        assert_eq!(StoreLimits::default().capacity, 5);
    }

    #[test]
    fn test_custom_capacity() {
        assert_eq!(StoreLimits::with_capacity(2).capacity, 2);
    }
}
