//! Event System - named-event publish/subscribe
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        EventEmitter                           │
//! │   subscribe / subscribe_once / unsubscribe / has_listeners    │
//! │                                                               │
//! │   ListenerRegistry: "resize" ──► [L1, L2, L3]  (Rc snapshot)  │
//! │                     "change" ──► [L4]                         │
//! │                                                               │
//! │   dispatch(&Event) ──► L1 ──► L2 ──► L3 ──► drop once-only    │
//! │   dispatch_by_type ──► EventPool (obtain / release)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is single-threaded (`Rc`, `Cell`, `RefCell`): dispatch is
//! synchronous and "concurrency" means reentrant dispatch from inside a
//! listener.
//!
//! ## Usage
//!
//! ```ignore
//! use kindle_foundation::event::{EventEmitter, Listener, RESIZING};
//!
//! let emitter = EventEmitter::new();
//! emitter.subscribe(RESIZING, &Listener::new(|event| event.prevent_default()));
//!
//! // cancelable: the listener vetoes the default action
//! assert!(!emitter.dispatch_by_type(RESIZING, true));
//! ```

pub mod emitter;
pub mod listener;
pub mod pool;
mod registry;
pub mod target;
pub mod types;

// Re-exports
pub use emitter::EventEmitter;
pub use listener::{Listener, ListenerFn, ListenerId};
pub use pool::{EventPool, PoolStats};
pub use target::EventTarget;
pub use types::{
    // Event record
    EmitterId,
    Event,
    // Well-known types
    ACTIVATE,
    CHANGE,
    CHANGING,
    COMPLETE,
    DEACTIVATE,
    IO_ERROR,
    RESIZE,
    RESIZING,
};
