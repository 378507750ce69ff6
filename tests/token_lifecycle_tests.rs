/// Lifecycle tests for the token store
///
/// These exercise the per-id state machine directly:
/// absent -> active (create), active -> active (reset),
/// active -> retired (sweep), retired terminal.
/// Run with: cargo test --test token_lifecycle_tests
use std::sync::Arc;

use tokenledger::{DiagnosticEvent, DiagnosticSink, MemorySink, TokenStore};

fn store(expiry_limit: u64) -> TokenStore {
    TokenStore::new(expiry_limit, Arc::new(MemorySink::new()))
}

#[test]
fn created_token_is_active_until_its_window_lapses() {
    let mut store = store(4);
    assert!(store.create(1, 10));

    assert_eq!(store.active_count(10), 1);
    assert_eq!(store.active_count(14), 1);
    assert_eq!(store.active_count(15), 0);
}

#[test]
fn reset_within_window_extends_activity() {
    let mut store = store(4);
    assert!(store.create(1, 0));
    assert!(store.reset(1, 4));

    // window now runs to 8, not 4
    assert_eq!(store.active_count(8), 1);
    assert_eq!(store.active_count(9), 0);
}

#[test]
fn reset_past_window_fails_and_does_not_resurrect() {
    let mut store = store(4);
    assert!(store.create(1, 0));
    assert!(!store.reset(1, 5));

    // still lapsed: the failed reset gave it no new window
    assert_eq!(store.active_count(5), 0);
    assert!(store.is_retired(1));
}

#[test]
fn retired_id_can_never_be_created_again() {
    let mut store = store(1);
    assert!(store.create(9, 0));
    assert_eq!(store.active_count(2), 0);

    for time in [2, 3, 50, u32::MAX as u64] {
        assert!(!store.create(9, time));
    }
    assert_eq!(store.active_count(2), 0);
}

#[test]
fn sweep_never_counts_a_retired_id() {
    let sink = Arc::new(MemorySink::new());
    let mut store = TokenStore::new(2, Arc::clone(&sink) as Arc<dyn DiagnosticSink>);

    assert!(store.create(1, 0));
    assert!(store.create(2, 3));
    // token 1 lapsed at 2, token 2 lives until 5
    assert_eq!(store.active_count(4), 1);
    assert!(store.is_retired(1));
    assert!(!store.is_retired(2));

    // a later sweep keeps 1 retired and eventually retires 2 as well
    assert_eq!(store.active_count(6), 0);
    assert!(store.is_retired(2));

    let retired: Vec<_> = sink
        .events()
        .into_iter()
        .filter_map(|event| match event {
            DiagnosticEvent::Retired { id } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(retired, vec![1, 2]);
}

#[test]
fn duplicate_create_leaves_original_window_intact() {
    let mut store = store(3);
    assert!(store.create(1, 0));
    assert!(!store.create(1, 2));

    // expiry stayed at 3; the refused create at 2 would have pushed it to 5
    assert_eq!(store.active_count(4), 0);
}

#[test]
fn zero_expiry_limit_matches_touch_instant_exactly() {
    let mut store = store(0);
    assert!(store.create(5, 10));
    assert!(store.reset(5, 10));

    assert_eq!(store.active_count(10), 1);
    assert_eq!(store.active_count(11), 0);
}

#[test]
fn store_reports_lifecycle_events_through_the_sink() {
    let sink = Arc::new(MemorySink::new());
    let mut store = TokenStore::new(2, Arc::clone(&sink) as Arc<dyn DiagnosticSink>);

    assert!(store.create(1, 0));
    assert!(store.reset(1, 1));
    assert_eq!(store.active_count(10), 0);

    assert_eq!(
        sink.events(),
        vec![
            DiagnosticEvent::Created { id: 1, time: 0 },
            DiagnosticEvent::ResetOk { id: 1, time: 1 },
            DiagnosticEvent::Retired { id: 1 },
        ]
    );
}
