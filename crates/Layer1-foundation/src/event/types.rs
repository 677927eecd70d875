//! Event Types - the event record passed to listeners
//!
//! An [`Event`] describes one occurrence: its type name, whether its default
//! action may be cancelled, whether a listener cancelled it, and which
//! emitter dispatched it.

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Well-known event types
// ============================================================================

/// Emitted when the application becomes active.
pub const ACTIVATE: &str = "activate";

/// Emitted when the application becomes inactive.
pub const DEACTIVATE: &str = "deactivate";

/// Emitted after the size of a window changed.
pub const RESIZE: &str = "resize";

/// Emitted before the size of a window changes. Cancelable.
pub const RESIZING: &str = "resizing";

/// Emitted after a value or selection changed.
pub const CHANGE: &str = "change";

/// Emitted before a value or selection changes. Cancelable.
pub const CHANGING: &str = "changing";

/// Emitted when a load request completed.
pub const COMPLETE: &str = "complete";

/// Emitted when a load request failed. The event text carries the reason.
pub const IO_ERROR: &str = "ioError";

// ============================================================================
// Emitter ID
// ============================================================================

static NEXT_EMITTER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an emitter, recorded as the `target` of dispatched events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId(u64);

impl EmitterId {
    pub(crate) fn next() -> Self {
        Self(NEXT_EMITTER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EmitterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "emitter-{}", self.0)
    }
}

// ============================================================================
// Event
// ============================================================================

/// An occurrence dispatched to listeners.
///
/// Type and cancelability are fixed once constructed (or reinitialized by the
/// pool). Listeners receive `&Event`; the only state they can change is the
/// prevented flag, through [`Event::prevent_default`].
#[derive(Debug, Clone)]
pub struct Event {
    event_type: String,
    cancelable: bool,
    default_prevented: Cell<bool>,
    target: Cell<Option<EmitterId>>,
    text: Option<String>,
}

impl Event {
    /// Create an event. The type is case-sensitive.
    pub fn new(event_type: impl Into<String>, cancelable: bool) -> Self {
        Self {
            event_type: event_type.into(),
            cancelable,
            default_prevented: Cell::new(false),
            target: Cell::new(None),
            text: None,
        }
    }

    /// Create an event carrying a text detail, e.g. an error message
    pub fn with_text(
        event_type: impl Into<String>,
        cancelable: bool,
        text: impl Into<String>,
    ) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(event_type, cancelable)
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Whether [`Event::prevent_default`] has any effect on this event
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// The emitter that most recently dispatched this event
    pub fn target(&self) -> Option<EmitterId> {
        self.target.get()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    /// Cancel the default action. Has no effect unless the event is cancelable.
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub(crate) fn set_target(&self, target: Option<EmitterId>) {
        self.target.set(target);
    }

    /// Reset every field for reuse. Keeps the type buffer's allocation.
    pub(crate) fn reinit(&mut self, event_type: &str, cancelable: bool) {
        self.event_type.clear();
        self.event_type.push_str(event_type);
        self.cancelable = cancelable;
        self.default_prevented.set(false);
        self.target.set(None);
        self.text = None;
    }
}
