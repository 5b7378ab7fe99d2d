//! Core types for the wordvault session protocol
//!
//! This crate defines the foundational types used throughout the system:
//! - ControlState: the four-valued session mode with its recovery slot
//! - Verb: the six request verbs
//! - VerbReply: the in-band Ok/Error reply every verb returns
//! - Violation: the recoverable protocol violations (capacity, index)
//! - StoreLimits: capacity configuration for the word store
//! - PersistenceAdapter: the injected persistence collaborator
//! - SessionId: log-correlation identifier for an engine instance

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod state;
pub mod traits;
pub mod types;
pub mod verb;

pub use error::Violation;
pub use limits::StoreLimits;
pub use state::{ControlState, ResumeState};
pub use traits::PersistenceAdapter;
pub use types::SessionId;
pub use verb::{Verb, VerbReply};
