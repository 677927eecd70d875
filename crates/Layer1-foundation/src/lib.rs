//! # kindle-foundation
//!
//! Foundation layer for Kindle:
//! - Event: named-event emitter, listener registry, event record, event pool
//! - Config: pool sizing and dispatch tracing (EventsConfig)
//! - Error: shared error type
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Collaborators (windows, loaders, ...)                   │
//! │  └── impl EventTarget { fn emitter() -> &EventEmitter } │
//! │                     │                                   │
//! │                     ▼                                   │
//! │               EventEmitter                              │
//! │          ┌─────────┴─────────┐                         │
//! │          ▼                   ▼                         │
//! │   ListenerRegistry       EventPool                     │
//! │   (per emitter)          (shared via Rc)               │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{EventsConfig, PoolConfig, EVENTS_CONFIG_FILE};

// ============================================================================
// Event
// ============================================================================
pub use event::{
    // Emitter
    EventEmitter,
    EventTarget,
    // Listener
    Listener,
    ListenerFn,
    ListenerId,
    // Event record
    EmitterId,
    Event,
    // Pool
    EventPool,
    PoolStats,
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
