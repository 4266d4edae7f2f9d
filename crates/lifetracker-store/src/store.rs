//! The lifecycle event store.
//!
//! [`EventStore`] is the single writer of the transition log and the single
//! publisher of one-shot notifications. A lifecycle source submits each
//! concrete transition as it happens; the store timestamps it, assigns its
//! display color, prepends it to the log, and broadcasts its label.
//!
//! Submissions come from a single logical writer (a host shell's lifecycle
//! machine is inherently serialized); readers are unlimited. Log
//! replacement is atomic with respect to readers, and the notification
//! publish never blocks on slow or absent observers.

use tokio::sync::{broadcast, watch};
use tracing::{debug, trace};

use lifetracker_types::{EventKind, LogEntry};

use crate::clock;
use crate::log::EventLog;
use crate::notifications::NotificationFeed;

/// Capacity of the broadcast channel for transition notifications.
///
/// An observer that falls more than this many emissions behind sees a lag
/// gap and resumes at the oldest retained label. Nothing is ever queued
/// for observers that are not subscribed.
const NOTIFY_CAPACITY: usize = 64;

/// Records lifecycle transitions and fans them out to observers.
///
/// Owns the sender halves of both channels. The durable log is published
/// through a watch channel: observers always read a complete, correctly
/// ordered snapshot and are signalled on every replacement. Notifications
/// go through a broadcast channel: delivery is best-effort, at most once
/// per submission, and only to observers subscribed at emission time.
#[derive(Debug)]
pub struct EventStore {
    /// Watch sender holding the current log snapshot.
    log_tx: watch::Sender<EventLog>,
    /// Broadcast sender for one-shot notification labels.
    notify_tx: broadcast::Sender<String>,
}

impl EventStore {
    /// Create a store with an empty log and no subscribers.
    pub fn new() -> Self {
        let (log_tx, _) = watch::channel(EventLog::default());
        let (notify_tx, _) = broadcast::channel(NOTIFY_CAPACITY);
        Self { log_tx, notify_tx }
    }

    /// Record a lifecycle transition.
    ///
    /// Captures the current wall-clock time, builds the log entry,
    /// replaces the log with `[entry, ..previous]`, and publishes the
    /// kind's label to currently subscribed notification observers.
    ///
    /// Filtering the catch-all sentinel is the lifecycle source's
    /// responsibility; a sentinel submission that slips through is ignored
    /// here rather than surfaced as an error.
    pub fn submit(&self, kind: EventKind) {
        if kind.is_sentinel() {
            debug!(label = kind.label(), "ignoring catch-all sentinel submission");
            return;
        }

        let entry = LogEntry {
            kind,
            timestamp: clock::now_timestamp(),
            color: kind.color(),
        };
        debug!(
            label = kind.label(),
            timestamp = %entry.timestamp,
            "transition recorded"
        );

        // Whole-value replacement: observers holding the previous snapshot
        // keep an unchanged sequence.
        self.log_tx.send_modify(|log| *log = log.prepended(entry));

        // send returns Err only when there are zero subscribers, which is
        // normal for a fire-and-forget channel.
        let delivered = self.notify_tx.send(kind.label().to_owned()).unwrap_or(0);
        trace!(label = kind.label(), delivered, "notification published");
    }

    /// Watch the transition log.
    ///
    /// The receiver yields the full, correctly ordered snapshot
    /// immediately and signals on every subsequent replacement. There is
    /// no partial or stale read.
    pub fn watch_log(&self) -> watch::Receiver<EventLog> {
        self.log_tx.subscribe()
    }

    /// Read the current log snapshot.
    pub fn log(&self) -> EventLog {
        self.log_tx.borrow().clone()
    }

    /// Subscribe to one-shot transition notifications.
    ///
    /// The feed is valid only for emissions that happen after this call;
    /// earlier notifications are never replayed. Dropping the feed
    /// unsubscribes immediately.
    pub fn subscribe(&self) -> NotificationFeed {
        NotificationFeed::new(self.notify_tx.subscribe())
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}
