//! Broadcast of action lifecycle events.

use pawn_actions::ActionEvent;
use serde::Serialize;
use tokio::sync::broadcast;

/// An [`ActionEvent`] stamped with the controller frame it happened in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerEvent {
    pub frame: u64,
    #[serde(flatten)]
    pub event: ActionEvent,
}

/// Lifecycle event fan-out.
///
/// Consumers subscribe and receive every event published after they
/// subscribed. Slow consumers lag rather than block the controller.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ControllerEvent>,
}

impl EventBus {
    pub const DEFAULT_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a bus buffering up to `capacity` events per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publishes an event to every current subscriber.
    pub fn publish(&self, event: ControllerEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("No subscribers for controller events");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ControllerEvent> {
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
