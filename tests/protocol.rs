//! End-to-end protocol scenarios
//!
//! Drives the full stack (request adapter → engine → persistence mirror) the
//! way an external transport would, one session per scenario.

use std::sync::{Arc, Once};
use wordvault::{ControlState, MirrorPersistence, RequestAdapter, StorageEngine};

static TRACING: Once = Once::new();

fn session() -> (RequestAdapter, Arc<MirrorPersistence>) {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
    let mirror = Arc::new(MirrorPersistence::new());
    let adapter = RequestAdapter::new(Arc::new(StorageEngine::new(mirror.clone())));
    (adapter, mirror)
}

fn res(adapter: &RequestAdapter, verb: &str, arg: Option<&str>) -> String {
    adapter.handle_raw(verb, arg).unwrap().res
}

/// The state name embedded in the composed status string.
fn state_name(adapter: &RequestAdapter) -> String {
    let status = res(adapter, "state", None);
    status
        .split_whitespace()
        .nth(1)
        .unwrap()
        .trim_end_matches('.')
        .to_string()
}

const FIVE_WORDS: [&str; 5] = [
    "first_word",
    "second_word",
    "third_word",
    "forth_word",
    "fifth_word",
];

fn add_five(adapter: &RequestAdapter) {
    for word in FIVE_WORDS {
        assert_eq!(res(adapter, "add", Some(word)), "Ok");
    }
}

#[test]
fn first_add_enters_input() {
    let (adapter, _mirror) = session();
    assert_eq!(res(&adapter, "add", Some("first_word")), "Ok");
    assert_eq!(state_name(&adapter), "Input");
}

#[test]
fn clear_then_stop_lands_in_standby() {
    let (adapter, _mirror) = session();
    res(&adapter, "add", Some("first_word"));
    assert_eq!(res(&adapter, "clear", None), "Ok");
    assert_eq!(res(&adapter, "stop", None), "Ok");
    assert_eq!(state_name(&adapter), "StandBy");
}

#[test]
fn five_adds_reach_query_and_read_back_in_order() {
    let (adapter, _mirror) = session();
    add_five(&adapter);
    assert_eq!(state_name(&adapter), "Query");
    assert_eq!(res(&adapter, "query", Some("1")), "first_word");
    assert_eq!(res(&adapter, "query", Some("5")), "fifth_word");
}

#[test]
fn overfull_add_errors_and_sorry_recovers_with_data_intact() {
    let (adapter, _mirror) = session();
    add_five(&adapter);
    assert_eq!(res(&adapter, "add", Some("sixth")), "Error");
    assert_eq!(state_name(&adapter), "Error");
    assert_eq!(res(&adapter, "sorry", None), "Ok");
    assert_eq!(state_name(&adapter), "Query");
    for (i, word) in FIVE_WORDS.iter().enumerate() {
        let position = (i + 1).to_string();
        assert_eq!(res(&adapter, "query", Some(position.as_str())), *word);
    }
}

#[test]
fn invalid_index_errors_and_clear_recovers_empty() {
    let (adapter, _mirror) = session();
    add_five(&adapter);
    assert_eq!(res(&adapter, "query", Some("6")), "Error");
    assert_eq!(state_name(&adapter), "Error");
    assert_eq!(res(&adapter, "clear", None), "Ok");
    assert_eq!(state_name(&adapter), "Input");
    assert!(adapter.engine().snapshot().is_empty());
}

#[test]
fn stop_wipes_the_store_not_just_the_label() {
    let (adapter, _mirror) = session();
    add_five(&adapter);
    assert_eq!(res(&adapter, "stop", None), "Ok");
    assert_eq!(state_name(&adapter), "StandBy");
    // Five fresh words must again reach lookup mode.
    add_five(&adapter);
    assert_eq!(state_name(&adapter), "Query");
    assert_eq!(res(&adapter, "query", Some("5")), "fifth_word");
}

#[test]
fn noop_add_and_stop_from_standby() {
    let (adapter, _mirror) = session();
    assert_eq!(res(&adapter, "add", None), "Ok");
    assert_eq!(res(&adapter, "stop", None), "Ok");
    assert_eq!(state_name(&adapter), "StandBy");
}

#[test]
fn mirror_sees_every_add_and_every_clear() {
    let (adapter, mirror) = session();
    add_five(&adapter);
    assert_eq!(mirror.entries(), FIVE_WORDS);
    res(&adapter, "clear", None);
    assert!(mirror.is_empty());

    // stop, sorry, query and state never notify.
    res(&adapter, "add", Some("again"));
    res(&adapter, "stop", None);
    res(&adapter, "sorry", None);
    res(&adapter, "state", None);
    assert_eq!(mirror.entries(), vec!["again"]);
}

#[test]
fn envelope_serializes_as_res_object() {
    let (adapter, _mirror) = session();
    let env = adapter.handle_raw("state", None).unwrap();
    assert_eq!(
        serde_json::to_string(&env).unwrap(),
        r#"{"res":"State: StandBy."}"#
    );
}

#[test]
fn error_mode_is_stable_until_recovery() {
    let (adapter, _mirror) = session();
    add_five(&adapter);
    res(&adapter, "query", Some("6"));
    assert!(adapter.engine().control_state().is_error());
    // add is a no-op in error mode; the session stays put.
    assert_eq!(res(&adapter, "add", Some("late")), "Ok");
    assert!(adapter.engine().control_state().is_error());
    assert_eq!(adapter.engine().snapshot(), FIVE_WORDS);
    res(&adapter, "sorry", None);
    assert_eq!(adapter.engine().control_state(), ControlState::Query);
}
