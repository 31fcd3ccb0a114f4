//! Broadcast channel for match events.

use tokio::sync::broadcast;

use super::types::MatchEvent;

/// Match event bus.
///
/// Publication is best-effort: events sent while nobody listens are dropped,
/// and slow subscribers observe `RecvError::Lagged`.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<MatchEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn publish(&self, event: MatchEvent) {
        let match_id = event.match_id();
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!(%match_id, "No subscribers for match event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
