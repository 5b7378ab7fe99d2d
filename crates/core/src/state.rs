//! Control state of a storage session
//!
//! The session mode is a closed tagged variant. All transition logic lives in
//! the engine and pattern-matches exhaustively over these variants; nothing in
//! the system branches on state name strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four-valued session mode governing which verbs are meaningful.
///
/// The `Error` variant carries the state that was active immediately before
/// the invalid operation. `sorry` consumes it to restore that state. The slot
/// is typed as [`ResumeState`] so an error can never record another error as
/// its resume target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlState {
    /// Idle with an empty store; nothing pending entry.
    StandBy,
    /// Accepting words; the store has room left.
    Input,
    /// The store is full; positional lookup is available.
    Query,
    /// The last attempted mutation or lookup was invalid.
    Error {
        /// State to restore when the caller apologizes.
        resume: ResumeState,
    },
}

impl ControlState {
    /// Get the state label reported by the `state` verb.
    pub fn name(&self) -> &'static str {
        match self {
            ControlState::StandBy => "StandBy",
            ControlState::Input => "Input",
            ControlState::Query => "Query",
            ControlState::Error { .. } => "Error",
        }
    }

    /// Check whether the session is in the error mode.
    pub fn is_error(&self) -> bool {
        matches!(self, ControlState::Error { .. })
    }
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A control state that can be resumed after an error.
///
/// Only the three non-error modes are representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeState {
    /// Resume idle.
    StandBy,
    /// Resume accepting words.
    Input,
    /// Resume positional lookup.
    Query,
}

impl From<ResumeState> for ControlState {
    fn from(resume: ResumeState) -> Self {
        match resume {
            ResumeState::StandBy => ControlState::StandBy,
            ResumeState::Input => ControlState::Input,
            ResumeState::Query => ControlState::Query,
        }
    }
}
