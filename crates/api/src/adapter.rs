//! Request adapter
//!
//! Translates an inbound verb-plus-argument call into an engine method call
//! and wraps the result in a response envelope. Every request desugars to
//! exactly one engine call; the adapter adds no semantics of its own.

use crate::envelope::Envelope;
use crate::request::{Request, RequestError};
use std::sync::Arc;
use tracing::debug;
use wordvault_engine::StorageEngine;

/// Dispatches parsed requests to a shared engine.
#[derive(Clone)]
pub struct RequestAdapter {
    engine: Arc<StorageEngine>,
}

impl RequestAdapter {
    /// Create an adapter over a shared engine.
    pub fn new(engine: Arc<StorageEngine>) -> Self {
        RequestAdapter { engine }
    }

    /// The engine behind this adapter.
    pub fn engine(&self) -> &Arc<StorageEngine> {
        &self.engine
    }

    /// Dispatch a typed request.
    pub fn handle(&self, request: Request) -> Envelope {
        let verb = request.verb();
        let reply = match &request {
            Request::Add { word } => self.engine.add(word.as_deref()),
            Request::Query { index } => self.engine.query(*index),
            Request::Clear => self.engine.clear(),
            Request::Stop => self.engine.stop(),
            Request::Sorry => self.engine.sorry(),
            Request::State => self.engine.state(),
        };
        debug!(
            target: "wordvault::api",
            session = %self.engine.session_id(),
            verb = verb.as_str(),
            label = reply.label(),
            "Request handled"
        );
        Envelope::from_reply(verb, &reply)
    }

    /// Parse and dispatch a raw `(verb, argument)` pair.
    ///
    /// Parse failures are adapter errors and never reach the engine.
    pub fn handle_raw(&self, verb: &str, arg: Option<&str>) -> Result<Envelope, RequestError> {
        let request = Request::parse(verb, arg)?;
        Ok(self.handle(request))
    }
}
