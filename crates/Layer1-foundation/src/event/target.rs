//! EventTarget - emitter capability by composition
//!
//! A type gains the emitter operations by owning an [`EventEmitter`] and
//! returning it from [`EventTarget::emitter`]; every other method has a
//! forwarding default.
//!
//! ```ignore
//! struct Loader {
//!     events: EventEmitter,
//! }
//!
//! impl EventTarget for Loader {
//!     fn emitter(&self) -> &EventEmitter {
//!         &self.events
//!     }
//! }
//! ```

use super::emitter::EventEmitter;
use super::listener::Listener;
use super::types::{EmitterId, Event};

pub trait EventTarget {
    /// The emitter this type dispatches through
    fn emitter(&self) -> &EventEmitter;

    /// Identity recorded as the `target` of events this type dispatches
    fn emitter_id(&self) -> EmitterId {
        self.emitter().id()
    }

    fn subscribe(&self, event_type: &str, listener: &Listener) -> bool {
        self.emitter().subscribe(event_type, listener)
    }

    fn subscribe_once(&self, event_type: &str, listener: &Listener) -> bool {
        self.emitter().subscribe_once(event_type, listener)
    }

    fn unsubscribe(&self, event_type: &str, listener: &Listener) -> bool {
        self.emitter().unsubscribe(event_type, listener)
    }

    fn has_listeners(&self, event_type: &str) -> bool {
        self.emitter().has_listeners(event_type)
    }

    fn dispatch(&self, event: &Event) -> bool {
        self.emitter().dispatch(event)
    }

    fn dispatch_by_type(&self, event_type: &str, cancelable: bool) -> bool {
        self.emitter().dispatch_by_type(event_type, cancelable)
    }
}

impl EventTarget for EventEmitter {
    fn emitter(&self) -> &EventEmitter {
        self
    }
}
