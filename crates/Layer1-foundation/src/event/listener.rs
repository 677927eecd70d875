//! Listener handles and bindings
//!
//! A [`Listener`] is a bound closure: whatever context the callback needs is
//! captured when the closure is built. Every clone of a `Listener` shares one
//! [`ListenerId`], which is what subscription dedup and removal compare.

use super::types::{EmitterId, Event};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Listener ID
// ============================================================================

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Listener identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

// ============================================================================
// Listener
// ============================================================================

/// Closure type for event listeners
pub type ListenerFn = dyn Fn(&Event);

/// A cloneable listener handle.
///
/// Keep a clone around to unsubscribe later:
///
/// ```ignore
/// let on_complete = Listener::new(move |event| log.borrow_mut().push(event.event_type().to_string()));
/// emitter.subscribe(COMPLETE, &on_complete);
/// emitter.unsubscribe(COMPLETE, &on_complete);
/// ```
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    callback: Rc<ListenerFn>,
}

impl Listener {
    pub fn new(callback: impl Fn(&Event) + 'static) -> Self {
        Self {
            id: ListenerId::next(),
            callback: Rc::new(callback),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Invoke the callback with `event`
    pub fn call(&self, event: &Event) {
        (self.callback)(event)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Listener {}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("id", &self.id).finish()
    }
}

// ============================================================================
// Binding
// ============================================================================

/// One registration of a listener for one event type on one emitter
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    pub(crate) event_type: Rc<str>,
    pub(crate) listener: Listener,
    pub(crate) owner: EmitterId,
    pub(crate) once: bool,
}

impl Binding {
    pub(crate) fn new(event_type: Rc<str>, listener: Listener, owner: EmitterId, once: bool) -> Self {
        Self {
            event_type,
            listener,
            owner,
            once,
        }
    }

    /// Bindings are keyed by (listener, owning emitter), never by binding identity
    pub(crate) fn matches(&self, listener: ListenerId, owner: EmitterId) -> bool {
        self.listener.id() == listener && self.owner == owner
    }
}
