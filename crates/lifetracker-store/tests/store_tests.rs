//! Integration tests for the lifecycle event store.
//!
//! These exercise the full observable contract: durable newest-first log,
//! consistent copy-on-write snapshots, and one-shot notification delivery
//! with no replay and no duplicates.

#![allow(clippy::unwrap_used)]

use lifetracker_store::EventStore;
use lifetracker_types::EventKind;

#[tokio::test]
async fn log_records_newest_first() {
    let store = EventStore::new();
    store.submit(EventKind::Created);
    store.submit(EventKind::Started);
    store.submit(EventKind::Resumed);

    let log = store.log();
    assert_eq!(log.len(), 3);
    let kinds: Vec<_> = log.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::Resumed, EventKind::Started, EventKind::Created]
    );
}

#[tokio::test]
async fn full_lifecycle_round_trip_preserves_order_and_length() {
    let script = [
        EventKind::Created,
        EventKind::Started,
        EventKind::Resumed,
        EventKind::Paused,
        EventKind::Stopped,
        EventKind::Started,
        EventKind::Resumed,
        EventKind::Paused,
        EventKind::Stopped,
        EventKind::Destroyed,
    ];

    let store = EventStore::new();
    for kind in script {
        store.submit(kind);
    }

    let log = store.log();
    assert_eq!(log.len(), script.len());
    let kinds: Vec<_> = log.iter().map(|e| e.kind).collect();
    let reversed: Vec<_> = script.iter().rev().copied().collect();
    assert_eq!(kinds, reversed);
}

#[tokio::test]
async fn every_entry_carries_its_kinds_fixed_color() {
    let store = EventStore::new();
    for kind in [
        EventKind::Created,
        EventKind::Started,
        EventKind::Resumed,
        EventKind::Paused,
        EventKind::Stopped,
        EventKind::Destroyed,
    ] {
        store.submit(kind);
    }

    for entry in &store.log() {
        assert_eq!(entry.color, entry.kind.color());
    }
}

#[tokio::test]
async fn late_log_observer_sees_full_history_then_updates() {
    let store = EventStore::new();
    store.submit(EventKind::Created);
    store.submit(EventKind::Started);

    // Subscribing after two submissions yields a complete snapshot at once.
    let mut rx = store.watch_log();
    assert_eq!(rx.borrow().len(), 2);

    store.submit(EventKind::Resumed);
    rx.changed().await.unwrap();

    let log = rx.borrow_and_update().clone();
    assert_eq!(log.len(), 3);
    assert_eq!(log.newest().unwrap().kind, EventKind::Resumed);
    // No entry was skipped or duplicated.
    let kinds: Vec<_> = log.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::Resumed, EventKind::Started, EventKind::Created]
    );
}

#[tokio::test]
async fn notifications_deliver_exactly_once_while_subscribed() {
    let store = EventStore::new();
    let mut feed = store.subscribe();

    store.submit(EventKind::Created);
    store.submit(EventKind::Paused);

    assert_eq!(feed.recv().await.as_deref(), Some("ON_CREATE"));
    assert_eq!(feed.recv().await.as_deref(), Some("ON_PAUSE"));
    assert_eq!(feed.try_recv(), None);
}

#[tokio::test]
async fn notifications_are_not_replayed_to_late_subscribers() {
    let store = EventStore::new();
    store.submit(EventKind::Created);

    let mut feed = store.subscribe();
    store.submit(EventKind::Started);

    assert_eq!(feed.recv().await.as_deref(), Some("ON_START"));
    assert_eq!(feed.try_recv(), None);
}

#[tokio::test]
async fn dropping_the_feed_unsubscribes_immediately() {
    let store = EventStore::new();
    let feed = store.subscribe();
    drop(feed);

    // Publishing after the drop must not fail, and a fresh subscription
    // must not see anything emitted before it existed.
    store.submit(EventKind::Stopped);
    let mut fresh = store.subscribe();
    assert_eq!(fresh.try_recv(), None);
}

#[tokio::test]
async fn feed_drains_pending_labels_then_closes_with_the_store() {
    let store = EventStore::new();
    let mut feed = store.subscribe();
    store.submit(EventKind::Created);
    drop(store);

    assert_eq!(feed.recv().await.as_deref(), Some("ON_CREATE"));
    assert_eq!(feed.recv().await, None);
}

#[tokio::test]
async fn submissions_without_observers_still_log() {
    let store = EventStore::new();
    store.submit(EventKind::Paused);

    let log = store.log();
    assert_eq!(log.len(), 1);
    assert_eq!(log.newest().unwrap().color.hex(), "FFCC80");
}

#[tokio::test]
async fn sentinel_submissions_are_ignored() {
    let store = EventStore::new();
    let mut feed = store.subscribe();

    store.submit(EventKind::Any);

    assert!(store.log().is_empty());
    assert_eq!(feed.try_recv(), None);
}

#[tokio::test]
async fn repeated_reads_are_structurally_equal() {
    let store = EventStore::new();
    store.submit(EventKind::Created);
    store.submit(EventKind::Stopped);

    assert_eq!(store.log(), store.log());
}

#[tokio::test]
async fn snapshots_are_isolated_from_later_submissions() {
    let store = EventStore::new();
    store.submit(EventKind::Created);

    let before = store.log();
    store.submit(EventKind::Destroyed);

    assert_eq!(before.len(), 1);
    assert_eq!(before.newest().unwrap().kind, EventKind::Created);
    assert_eq!(store.log().len(), 2);
}

#[tokio::test]
async fn created_then_resumed_scenario() {
    let store = EventStore::new();
    let mut feed = store.subscribe();

    store.submit(EventKind::Created);
    store.submit(EventKind::Resumed);

    let log = store.log();
    let rendered: Vec<_> = log.iter().map(|e| (e.kind, e.color.hex())).collect();
    assert_eq!(
        rendered,
        vec![
            (EventKind::Resumed, String::from("81C784")),
            (EventKind::Created, String::from("C8E6C9")),
        ]
    );

    // One label per submission, delivered in submission order.
    assert_eq!(feed.recv().await.as_deref(), Some("ON_CREATE"));
    assert_eq!(feed.recv().await.as_deref(), Some("ON_RESUME"));
    assert_eq!(feed.try_recv(), None);
}

#[tokio::test]
async fn entry_timestamps_use_the_fixed_format() {
    let store = EventStore::new();
    store.submit(EventKind::Started);

    let log = store.log();
    let timestamp = &log.newest().unwrap().timestamp;
    assert_eq!(timestamp.len(), 12);
    assert!(chrono::NaiveTime::parse_from_str(timestamp, "%H:%M:%S%.3f").is_ok());
}

#[tokio::test]
async fn lagged_feed_skips_ahead_without_duplicates() {
    let store = EventStore::new();
    let mut feed = store.subscribe();

    // Overrun the notification buffer without consuming.
    for _ in 0..70 {
        store.submit(EventKind::Resumed);
    }

    let received = std::iter::from_fn(|| feed.try_recv()).count();
    assert!(received < 70, "a lagged feed must not see every emission");
    assert!(received > 0, "a lagged feed resumes at the retained labels");
    // The durable log is unaffected by notification backpressure.
    assert_eq!(store.log().len(), 70);
}
