//! Response envelope
//!
//! Every dispatched request comes back as `{res: string}`. `res` carries the
//! verb's logical payload (a queried word, or the composed status string for
//! `state`) or one of the two literals `"Ok"` / `"Error"`. Logical failure
//! travels entirely in-band; there is no transport-level failure channel
//! here.

use serde::{Deserialize, Serialize};
use wordvault_core::{Verb, VerbReply};

/// The `{res: string}` response wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Logical payload or the `"Ok"` / `"Error"` literal.
    pub res: String,
}

impl Envelope {
    /// The plain success envelope.
    pub fn ok() -> Self {
        Envelope { res: "Ok".to_string() }
    }

    /// The in-band failure envelope.
    pub fn error() -> Self {
        Envelope {
            res: "Error".to_string(),
        }
    }

    /// Envelope carrying a queried word.
    pub fn word(word: impl Into<String>) -> Self {
        Envelope { res: word.into() }
    }

    /// Envelope carrying the composed status string for `state`.
    pub fn status(state_name: &str) -> Self {
        Envelope {
            res: format!("State: {state_name}."),
        }
    }

    /// Wrap an engine reply for the given verb.
    pub fn from_reply(verb: Verb, reply: &VerbReply) -> Self {
        match reply {
            VerbReply::Error(_) => Envelope::error(),
            VerbReply::Ok(payload) => match (verb, payload) {
                (Verb::State, Some(name)) => Envelope::status(name),
                (_, Some(word)) => Envelope::word(word.clone()),
                (_, None) => Envelope::ok(),
            },
        }
    }
}
