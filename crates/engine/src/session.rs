//! The storage engine state machine
//!
//! Owns the word store and the control state, exposes the six verbs, and
//! notifies the persistence adapter on effectful mutations. Every verb reads
//! the current state, decides a transition, mutates the store, and issues the
//! persistence notification as one atomic unit behind a single mutex; two
//! verbs never interleave.
//!
//! Logical failure (a capacity or index violation) is an in-band
//! [`VerbReply::Error`], never a Rust error: the violation moves the session
//! to the error mode with the store preserved, and the caller recovers with
//! `sorry`, `clear`, or `stop`.

use crate::persistence::NullPersistence;
use crate::store::WordStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, warn};
use wordvault_core::{
    ControlState, PersistenceAdapter, ResumeState, SessionId, StoreLimits, VerbReply, Violation,
};

struct Inner {
    words: WordStore,
    state: ControlState,
}

/// The four-state storage engine.
///
/// Created once per logical session and shared behind an `Arc`; verb
/// execution is serialized end-to-end, so the state invariants hold at every
/// observable point:
///
/// - `StandBy` ⇒ empty store
/// - `Input` ⇒ `len < capacity`
/// - `Query` ⇒ `len == capacity`
/// - `Error` ⇒ store unchanged since the violation
pub struct StorageEngine {
    inner: Mutex<Inner>,
    persistence: Arc<dyn PersistenceAdapter>,
    id: SessionId,
}

impl StorageEngine {
    /// Create an engine with default limits and the given persistence adapter.
    pub fn new(persistence: Arc<dyn PersistenceAdapter>) -> Self {
        Self::with_limits(StoreLimits::default(), persistence)
    }

    /// Create an engine with custom limits.
    pub fn with_limits(limits: StoreLimits, persistence: Arc<dyn PersistenceAdapter>) -> Self {
        let id = SessionId::new();
        debug!(
            target: "wordvault::engine",
            session = %id,
            capacity = limits.capacity,
            adapter = persistence.name(),
            "Session created"
        );
        StorageEngine {
            inner: Mutex::new(Inner {
                words: WordStore::new(limits),
                state: ControlState::StandBy,
            }),
            persistence,
            id,
        }
    }

    /// Create an engine whose notifications are discarded.
    pub fn detached() -> Self {
        Self::new(Arc::new(NullPersistence::new()))
    }

    /// The log-correlation id of this session.
    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// `add` verb: append a word to the store.
    ///
    /// An absent word is a no-op everywhere. In `StandBy` and `Input` a
    /// present word is pushed (moving to `Query` when the push fills the
    /// store) and the persistence adapter is notified once. In `Query` the
    /// attempt is a capacity violation. In the error mode the verb is a
    /// no-op.
    pub fn add(&self, word: Option<&str>) -> VerbReply {
        let mut inner = self.inner.lock();
        match (inner.state, word) {
            (ControlState::StandBy | ControlState::Input, None) => VerbReply::ok(),
            (ControlState::StandBy | ControlState::Input, Some(w)) => {
                inner.words.push(w);
                inner.state = if inner.words.is_full() {
                    ControlState::Query
                } else {
                    ControlState::Input
                };
                self.persistence.notify(Some(w));
                debug!(
                    target: "wordvault::engine",
                    session = %self.id,
                    stored = inner.words.len(),
                    state = %inner.state,
                    "Word accepted"
                );
                VerbReply::ok()
            }
            (ControlState::Query, _) => {
                let violation = Violation::Capacity {
                    capacity: inner.words.capacity(),
                };
                inner.state = ControlState::Error {
                    resume: ResumeState::Query,
                };
                warn!(
                    target: "wordvault::engine",
                    session = %self.id,
                    violation = %violation,
                    "Add rejected"
                );
                VerbReply::error(violation)
            }
            (ControlState::Error { .. }, _) => VerbReply::ok(),
        }
    }

    /// `query` verb: word at the 1-based `index`.
    ///
    /// Only meaningful in `Query`. A position outside `[1, len]` is an index
    /// violation; outside `Query` the reply is the same violation but the
    /// state is left untouched.
    pub fn query(&self, index: i64) -> VerbReply {
        let mut inner = self.inner.lock();
        let len = inner.words.len();
        match inner.state {
            ControlState::Query => match inner.words.get(index) {
                Some(word) => VerbReply::with_payload(word),
                None => {
                    let violation = Violation::Index { index, len };
                    inner.state = ControlState::Error {
                        resume: ResumeState::Query,
                    };
                    warn!(
                        target: "wordvault::engine",
                        session = %self.id,
                        violation = %violation,
                        "Query rejected"
                    );
                    VerbReply::error(violation)
                }
            },
            _ => VerbReply::error(Violation::Index { index, len }),
        }
    }

    /// `clear` verb: wipe the store and return to `Input`.
    ///
    /// Valid from every state; notifies the persistence adapter once.
    pub fn clear(&self) -> VerbReply {
        let mut inner = self.inner.lock();
        inner.words.wipe();
        inner.state = ControlState::Input;
        self.persistence.notify(None);
        debug!(target: "wordvault::engine", session = %self.id, "Store cleared");
        VerbReply::ok()
    }

    /// `stop` verb: wipe the store and return to `StandBy`.
    ///
    /// Valid from every state; emits no persistence notification.
    pub fn stop(&self) -> VerbReply {
        let mut inner = self.inner.lock();
        inner.words.wipe();
        inner.state = ControlState::StandBy;
        debug!(target: "wordvault::engine", session = %self.id, "Session stopped");
        VerbReply::ok()
    }

    /// `sorry` verb: leave the error mode.
    ///
    /// Restores the state recorded when the violation occurred; the store is
    /// untouched. Outside the error mode this is a no-op.
    pub fn sorry(&self) -> VerbReply {
        let mut inner = self.inner.lock();
        if let ControlState::Error { resume } = inner.state {
            inner.state = resume.into();
            debug!(
                target: "wordvault::engine",
                session = %self.id,
                state = %inner.state,
                "Error acknowledged"
            );
        }
        VerbReply::ok()
    }

    /// `state` verb: current control-state label.
    pub fn state(&self) -> VerbReply {
        VerbReply::with_payload(self.inner.lock().state.name())
    }

    /// Current control state, for diagnostics and tests.
    pub fn control_state(&self) -> ControlState {
        self.inner.lock().state
    }

    /// Cloned view of the stored words, for diagnostics and tests.
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.lock().words.snapshot()
    }
}
