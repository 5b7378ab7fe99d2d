//! Request adapter layer for wordvault
//!
//! Sits between an inbound transport (whatever it is - the workspace defines
//! none) and the storage engine:
//!
//! - [`Request`]: typed verb-plus-argument calls, with parse errors that stay
//!   on the adapter side of the boundary
//! - [`RequestAdapter`]: one engine call per request, no hidden semantics
//! - [`Envelope`]: the `{res}` response wrapper; protocol failures travel
//!   in-band as the `"Error"` literal
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use wordvault_api::RequestAdapter;
//! use wordvault_engine::StorageEngine;
//!
//! let adapter = RequestAdapter::new(Arc::new(StorageEngine::detached()));
//! let env = adapter.handle_raw("add", Some("first_word"))?;
//! assert_eq!(env.res, "Ok");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod adapter;
mod envelope;
mod request;

pub use adapter::RequestAdapter;
pub use envelope::Envelope;
pub use request::{Request, RequestError};
