//! In-process publication of plugin events.
//!
//! Listeners subscribe to a `tokio::sync::broadcast` channel. Publishing never
//! blocks and never fails: with no subscriber the event is dropped, and a slow
//! subscriber sees `RecvError::Lagged` on its next receive.

use crate::domain::events::PluginEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

/// A published event with its delivery metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique id of this publication.
    pub id: Uuid,
    /// When the event was published.
    pub timestamp: DateTime<Utc>,
    /// The event itself.
    pub event: PluginEvent,
}

impl EventEnvelope {
    /// Wraps an event with a fresh id and the current time.
    pub fn new(event: PluginEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Fan-out bus for plugin events.
///
/// Cloning the bus is cheap and every clone publishes to the same subscribers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Creates a bus that buffers up to `capacity` events per subscriber.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Returns the number of subscribers the event was delivered to.
    pub fn publish(&self, event: impl Into<PluginEvent>) -> usize {
        let envelope = EventEnvelope::new(event.into());
        debug!(event = envelope.event.name(), id = %envelope.id, "Publishing event");
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Registers a new subscriber. It only sees events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
