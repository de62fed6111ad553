//! Domain event system — decoupled notification of session progress.
//!
//! The session publishes an event for every screen change and for every
//! finished or failed assessment. Front ends and loggers subscribe without
//! coupling to the state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// All domain events in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainEvent {
    /// The session moved to another screen
    ScreenChanged {
        session_id: String,
        from: String,
        to: String,
        action: String,
        timestamp: DateTime<Utc>,
    },

    /// An assessment was scored
    AssessmentCompleted {
        session_id: String,
        career_id: String,
        compatibility_score: u8,
        timestamp: DateTime<Utc>,
    },

    /// Processing failed and the session went back to the questions
    AssessmentFailed {
        session_id: String,
        error_message: String,
        timestamp: DateTime<Utc>,
    },

    /// The session was reset to its initial state
    SessionReset {
        session_id: String,
        timestamp: DateTime<Utc>,
    },
}

/// A broadcast-based event bus for domain events.
///
/// Uses `tokio::sync::broadcast` for multi-consumer pub/sub.
pub struct EventBus {
    sender: broadcast::Sender<Arc<DomainEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all subscribers.
    pub fn publish(&self, event: DomainEvent) {
        // No subscribers is fine
        let _ = self.sender.send(Arc::new(event));
    }

    /// Subscribe to receive events.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<DomainEvent>> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn event_bus_publish_subscribe() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(DomainEvent::AssessmentCompleted {
            session_id: "s1".into(),
            career_id: "doctor".into(),
            compatibility_score: 82,
            timestamp: Utc::now(),
        });

        let event = rx.recv().await.unwrap();
        match event.as_ref() {
            DomainEvent::AssessmentCompleted {
                career_id,
                compatibility_score,
                ..
            } => {
                assert_eq!(career_id, "doctor");
                assert_eq!(*compatibility_score, 82);
            }
            _ => panic!("Expected AssessmentCompleted event"),
        }
    }

    #[test]
    fn event_bus_no_subscribers_doesnt_panic() {
        let bus = EventBus::new(16);
        bus.publish(DomainEvent::SessionReset {
            session_id: "s1".into(),
            timestamp: Utc::now(),
        });
    }
}
