// Change notifications for the serving layer.
//
// Services emit after a successful write. Scoring and aggregation never
// touch the bus; they return plain values.

pub use bus::{EventBus, DEFAULT_EVENT_CAPACITY};
pub use events::FantasyEvent;
pub use subscriber::spawn_event_logger;

mod bus;
mod events;
mod subscriber;
