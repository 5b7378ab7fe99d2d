//! Persistence collaborator interface
//!
//! The engine does not persist anything itself; it notifies an injected
//! collaborator on effectful mutations. The collaborator mirrors the word
//! buffer however it likes (or not at all).
//!
//! # Contract
//!
//! The engine calls [`PersistenceAdapter::notify`] exactly once per successful
//! `add` (with the appended word) and exactly once per `clear` (with `None`).
//! No call is made for no-op adds, `stop`, `sorry`, `query`, or `state`.
//!
//! The call happens synchronously inside the engine's locked verb execution,
//! so implementations must not block unboundedly. The engine neither retries
//! nor observes failure; an adapter that can fail owns its own reporting.

/// Single-method persistence collaborator supplied at engine construction.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the engine is shared across threads.
pub trait PersistenceAdapter: Send + Sync {
    /// Receive one buffer update.
    ///
    /// `Some(word)` means "append this word to the mirrored buffer";
    /// `None` means "clear the mirrored buffer".
    fn notify(&self, value: Option<&str>);

    /// Human-readable adapter name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingAdapter {
        seen: std::sync::Mutex<Vec<Option<String>>>,
    }

    impl PersistenceAdapter for RecordingAdapter {
        fn notify(&self, value: Option<&str>) {
            self.seen.lock().unwrap().push(value.map(str::to_string));
        }

        fn name(&self) -> &'static str {
            "Recording"
        }
    }

    #[test]
    fn test_adapter_object_safety() {
        let adapter = RecordingAdapter {
            seen: std::sync::Mutex::new(Vec::new()),
        };
        let dyn_adapter: &dyn PersistenceAdapter = &adapter;
        dyn_adapter.notify(Some("word"));
        dyn_adapter.notify(None);
        assert_eq!(dyn_adapter.name(), "Recording");
        let seen = adapter.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[Some("word".to_string()), None]);
    }
}
