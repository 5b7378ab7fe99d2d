//! Typed requests and their parse errors
//!
//! Parse failures here are adapter-level concerns (a malformed call never
//! reached the engine) and are kept strictly apart from the engine's in-band
//! protocol errors: a bad index *string* is a `RequestError`, a bad index
//! *position* is a protocol violation reported inside the envelope.

use thiserror::Error;
use wordvault_core::Verb;

/// A parsed verb-plus-argument call, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Append a word (absent word is a protocol-level no-op).
    Add {
        /// The word to append, if any.
        word: Option<String>,
    },
    /// Positional lookup.
    Query {
        /// 1-based position.
        index: i64,
    },
    /// Wipe the store, return to `Input`.
    Clear,
    /// Wipe the store, return to `StandBy`.
    Stop,
    /// Recover from the error mode.
    Sorry,
    /// Report the current control state.
    State,
}

impl Request {
    /// Parse a raw `(verb, argument)` pair.
    ///
    /// `add` takes an optional word; `query` requires an integer index; the
    /// remaining verbs ignore their argument.
    pub fn parse(verb: &str, arg: Option<&str>) -> Result<Self, RequestError> {
        match verb {
            "add" => Ok(Request::Add {
                word: arg.map(str::to_string),
            }),
            "query" => {
                let raw = arg.ok_or(RequestError::MissingArgument {
                    verb: Verb::Query,
                    name: "index",
                })?;
                let index = raw
                    .parse::<i64>()
                    .map_err(|_| RequestError::InvalidIndex(raw.to_string()))?;
                Ok(Request::Query { index })
            }
            "clear" => Ok(Request::Clear),
            "stop" => Ok(Request::Stop),
            "sorry" => Ok(Request::Sorry),
            "state" => Ok(Request::State),
            other => Err(RequestError::UnknownVerb(other.to_string())),
        }
    }

    /// The verb this request dispatches to.
    pub fn verb(&self) -> Verb {
        match self {
            Request::Add { .. } => Verb::Add,
            Request::Query { .. } => Verb::Query,
            Request::Clear => Verb::Clear,
            Request::Stop => Verb::Stop,
            Request::Sorry => Verb::Sorry,
            Request::State => Verb::State,
        }
    }
}

/// A call the adapter could not translate into an engine method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The verb name is not part of the protocol.
    #[error("unknown verb: {0}")]
    UnknownVerb(String),

    /// A required argument was absent.
    #[error("verb `{verb}` requires argument `{name}`", verb = .verb.as_str())]
    MissingArgument {
        /// The verb that was called.
        verb: Verb,
        /// Name of the missing argument.
        name: &'static str,
    },

    /// The index argument is not an integer.
    #[error("invalid index: {0:?}")]
    InvalidIndex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_word() {
        let req = Request::parse("add", Some("qwert")).unwrap();
        assert_eq!(
            req,
            Request::Add {
                word: Some("qwert".to_string())
            }
        );
        assert_eq!(req.verb(), Verb::Add);
    }

    #[test]
    fn test_parse_add_without_word() {
        let req = Request::parse("add", None).unwrap();
        assert_eq!(req, Request::Add { word: None });
    }

    #[test]
    fn test_parse_query() {
        let req = Request::parse("query", Some("3")).unwrap();
        assert_eq!(req, Request::Query { index: 3 });
        assert_eq!(req.verb(), Verb::Query);
    }

    #[test]
    fn test_parse_query_negative_index_is_well_formed() {
        // Range checking is the engine's job; the adapter only parses.
        let req = Request::parse("query", Some("-1")).unwrap();
        assert_eq!(req, Request::Query { index: -1 });
    }

    #[test]
    fn test_parse_query_without_index() {
        let err = Request::parse("query", None).unwrap_err();
        assert!(matches!(err, RequestError::MissingArgument { .. }));
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_parse_query_with_garbage_index() {
        let err = Request::parse("query", Some("six")).unwrap_err();
        assert_eq!(err, RequestError::InvalidIndex("six".to_string()));
    }

    #[test]
    fn test_parse_bare_verbs() {
        assert_eq!(Request::parse("clear", None).unwrap(), Request::Clear);
        assert_eq!(Request::parse("stop", None).unwrap(), Request::Stop);
        assert_eq!(Request::parse("sorry", None).unwrap(), Request::Sorry);
        assert_eq!(Request::parse("state", None).unwrap(), Request::State);
    }

    #[test]
    fn test_parse_unknown_verb() {
        let err = Request::parse("drop", None).unwrap_err();
        assert_eq!(err, RequestError::UnknownVerb("drop".to_string()));
    }
}
