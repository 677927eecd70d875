//! Config - event system settings
//!
//! - `events.rs` - EventsConfig (pool sizing, dispatch tracing)

mod events;

pub use events::{EventsConfig, PoolConfig, EVENTS_CONFIG_FILE};
