use tokio::{sync::broadcast::error::RecvError, task::JoinHandle};
use tracing::{info, warn};

use super::EventBus;

/// Logs every event on the bus until it closes
pub fn spawn_event_logger(bus: &EventBus) -> JoinHandle<()> {
    let mut receiver = bus.subscribe();

    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => info!(event_type = event.event_type(), "Data changed"),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Event logger lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
