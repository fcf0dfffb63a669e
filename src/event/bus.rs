use tokio::sync::broadcast;
use tracing::debug;

use super::events::FantasyEvent;

pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// Broadcasts data-change events to every subscriber
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<FantasyEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    /// Creates a bus buffering up to `capacity` events per lagging receiver
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn emit(&self, event: FantasyEvent) {
        let event_type = event.event_type();
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(event_type, receivers = receiver_count, "Event emitted");
            }
            Err(_) => {
                debug!(event_type, "Event emitted with no receivers");
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<FantasyEvent> {
        self.sender.subscribe()
    }
}
