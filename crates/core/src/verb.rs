//! Request verbs and the in-band reply they return

use crate::error::Violation;
use serde::{Deserialize, Serialize};

/// The six verbs of the session protocol.
///
/// Used for dispatch labels and log fields; the engine exposes one method per
/// verb rather than a single dispatch entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verb {
    /// Append a word to the store.
    Add,
    /// Positional lookup in a full store.
    Query,
    /// Wipe the store and return to accepting words.
    Clear,
    /// Wipe the store and return to idle.
    Stop,
    /// Recover from the error mode.
    Sorry,
    /// Report the current control state.
    State,
}

impl Verb {
    /// Get the lowercase wire name of this verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Add => "add",
            Verb::Query => "query",
            Verb::Clear => "clear",
            Verb::Stop => "stop",
            Verb::Sorry => "sorry",
            Verb::State => "state",
        }
    }
}

/// In-band outcome of a verb.
///
/// Every verb call completes with one of these; logical failure is a value,
/// never a Rust error return. The payload carries the queried word (`query`)
/// or the state label (`state`); all other verbs reply without a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerbReply {
    /// The verb succeeded, optionally carrying a payload.
    Ok(Option<String>),
    /// The verb hit a protocol violation.
    Error(Violation),
}

impl VerbReply {
    /// Successful reply with no payload.
    pub fn ok() -> Self {
        VerbReply::Ok(None)
    }

    /// Successful reply carrying a payload.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        VerbReply::Ok(Some(payload.into()))
    }

    /// Failed reply carrying the violation.
    pub fn error(violation: Violation) -> Self {
        VerbReply::Error(violation)
    }

    /// The `"Ok"` / `"Error"` label reported to callers.
    pub fn label(&self) -> &'static str {
        match self {
            VerbReply::Ok(_) => "Ok",
            VerbReply::Error(_) => "Error",
        }
    }

    /// Check whether the verb succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, VerbReply::Ok(_))
    }

    /// Borrow the payload, if any.
    pub fn payload(&self) -> Option<&str> {
        match self {
            VerbReply::Ok(payload) => payload.as_deref(),
            VerbReply::Error(_) => None,
        }
    }

    /// Borrow the violation, if the verb failed.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            VerbReply::Ok(_) => None,
            VerbReply::Error(violation) => Some(violation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_names() {
        assert_eq!(Verb::Add.as_str(), "add");
        assert_eq!(Verb::Query.as_str(), "query");
        assert_eq!(Verb::Clear.as_str(), "clear");
        assert_eq!(Verb::Stop.as_str(), "stop");
        assert_eq!(Verb::Sorry.as_str(), "sorry");
        assert_eq!(Verb::State.as_str(), "state");
    }

    #[test]
    fn test_ok_reply() {
        let reply = VerbReply::ok();
        assert!(reply.is_ok());
        assert_eq!(reply.label(), "Ok");
        assert!(reply.payload().is_none());
        assert!(reply.violation().is_none());
    }

    #[test]
    fn test_payload_reply() {
        let reply = VerbReply::with_payload("first_word");
        assert!(reply.is_ok());
        assert_eq!(reply.payload(), Some("first_word"));
    }

    #[test]
    fn test_error_reply() {
        let reply = VerbReply::error(Violation::Capacity { capacity: 5 });
        assert!(!reply.is_ok());
        assert_eq!(reply.label(), "Error");
        assert!(reply.payload().is_none());
        assert_eq!(
            reply.violation(),
            Some(&Violation::Capacity { capacity: 5 })
        );
    }
}
