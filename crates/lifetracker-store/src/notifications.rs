//! Receiver side of the one-shot notification channel.
//!
//! Each transition publishes exactly one label. A feed only sees labels
//! published while it exists: there is no replay and no catch-up buffer
//! for observers that subscribed late or not at all. A feed that falls
//! behind the channel capacity skips the gap and resumes at the oldest
//! retained label.

use tokio::sync::broadcast;
use tracing::debug;

/// A subscription to transition notification labels.
///
/// Obtained from [`EventStore::subscribe`]; valid only for future
/// emissions. Dropping the feed is an immediate, effect-free unsubscribe.
///
/// [`EventStore::subscribe`]: crate::store::EventStore::subscribe
#[derive(Debug)]
pub struct NotificationFeed {
    /// Underlying broadcast receiver.
    rx: broadcast::Receiver<String>,
}

impl NotificationFeed {
    /// Wrap a broadcast receiver.
    pub(crate) fn new(rx: broadcast::Receiver<String>) -> Self {
        Self { rx }
    }

    /// Receive the next notification label.
    ///
    /// Returns `None` once the store has been dropped and every pending
    /// label is consumed. Lag gaps are skipped silently apart from a
    /// debug-level trace.
    pub async fn recv(&mut self) -> Option<String> {
        loop {
            match self.rx.recv().await {
                Ok(label) => return Some(label),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "notification observer lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Receive the next notification label without waiting.
    ///
    /// Returns `None` when nothing is pending or the store is gone.
    pub fn try_recv(&mut self) -> Option<String> {
        loop {
            match self.rx.try_recv() {
                Ok(label) => return Some(label),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    debug!(skipped, "notification observer lagged, skipping ahead");
                }
                Err(
                    broadcast::error::TryRecvError::Empty
                    | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
