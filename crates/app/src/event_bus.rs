//! In-process event bus backed by a tokio broadcast channel.
//!
//! Registered as a regular [`StatusListener`], it turns each synchronous
//! callback into a [`SecurityEvent`] that async subscribers can consume.

use tokio::sync::broadcast;

use catpoint_domain::event::SecurityEvent;
use catpoint_domain::status::AlarmStatus;

use crate::ports::StatusListener;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<SecurityEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SecurityEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    pub fn publish(&self, event: SecurityEvent) {
        // broadcast::send fails only when there are zero receivers.
        if self.sender.send(event).is_err() {
            tracing::trace!("security event dropped, no subscribers");
        }
    }
}

impl StatusListener for InProcessEventBus {
    fn notify(&self, status: AlarmStatus) {
        self.publish(SecurityEvent::alarm_status_changed(status));
    }

    fn cat_detected(&self, present: bool) {
        self.publish(SecurityEvent::cat_detected(present));
    }
}
