//! Protocol violations
//!
//! Both violations are recoverable, expected outcomes of the protocol, not
//! faults of the engine. They travel in-band inside a [`VerbReply`] and never
//! cross the engine boundary as a Rust error.
//!
//! [`VerbReply`]: crate::verb::VerbReply

use thiserror::Error;

/// A recoverable protocol violation.
///
/// Either variant moves the session to the error mode (with the store
/// preserved exactly) and is reported to the caller as an `Error` label.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An `add` was attempted while the store already holds `capacity` words.
    #[error("capacity violation: store already holds {capacity} words")]
    Capacity {
        /// The store capacity at the time of the attempt.
        capacity: usize,
    },

    /// A `query` named a position outside `[1, len]`.
    #[error("index violation: position {index} outside 1..={len}")]
    Index {
        /// The requested 1-based position.
        index: i64,
        /// Number of words stored at the time of the attempt.
        len: usize,
    },
}
