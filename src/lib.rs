//! Wordvault - a bounded in-memory word store with a session protocol
//!
//! A capacity-bounded word buffer governed by four control states (`StandBy`,
//! `Input`, `Query`, `Error`), driven through six verbs (`add`, `query`,
//! `clear`, `stop`, `sorry`, `state`). Protocol failures are ordinary
//! replies, never faults; an external persistence collaborator mirrors every
//! effectful mutation.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wordvault::{MirrorPersistence, RequestAdapter, StorageEngine};
//!
//! let mirror = Arc::new(MirrorPersistence::new());
//! let adapter = RequestAdapter::new(Arc::new(StorageEngine::new(mirror.clone())));
//!
//! adapter.handle_raw("add", Some("first_word"))?;
//! assert_eq!(adapter.handle_raw("state", None)?.res, "State: Input.");
//! ```
//!
//! The stateless text utilities (case transforms, password scoring, random
//! strings, weekday reporting, field tables) live in [`text`] and share no
//! state with the engine.

// Re-export the public surface of the member crates.
pub use wordvault_api::{Envelope, Request, RequestAdapter, RequestError};
pub use wordvault_core::{
    ControlState, PersistenceAdapter, ResumeState, SessionId, StoreLimits, Verb, VerbReply,
    Violation,
};
pub use wordvault_engine::{MirrorPersistence, NullPersistence, StorageEngine, WordStore};

pub use wordvault_text as text;
