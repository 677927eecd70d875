//! Event Emitter - synchronous, reentrant dispatch
//!
//! Listeners run in registration order on the caller's stack. A listener may
//! subscribe, unsubscribe or dispatch again (on this or another emitter)
//! while it runs:
//!   - A listener added during dispatch is not called until the next dispatch.
//!   - A listener removed during dispatch is still called in the current one.
//!   - One-shot listeners are removed once the outermost dispatch on this
//!     emitter unwinds.
//!
//! No `RefCell` borrow is held while a listener runs.

use super::listener::{Binding, Listener, ListenerId};
use super::pool::EventPool;
use super::registry::ListenerRegistry;
use super::types::{EmitterId, Event};
use crate::config::EventsConfig;
use crate::{Error, Result};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, trace};

/// Keeps the notify depth balanced even if a listener panics
struct NotifyGuard<'a> {
    depth: &'a Cell<usize>,
}

impl<'a> NotifyGuard<'a> {
    fn enter(depth: &'a Cell<usize>) -> Self {
        depth.set(depth.get() + 1);
        Self { depth }
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

/// Event emitter
///
/// ## Usage
///
/// ```ignore
/// use kindle_foundation::event::{EventEmitter, Listener, COMPLETE};
///
/// let emitter = EventEmitter::new();
/// let on_complete = Listener::new(|event| println!("{}", event.event_type()));
///
/// emitter.subscribe(COMPLETE, &on_complete);
/// assert!(emitter.dispatch_by_type(COMPLETE, false));
/// emitter.unsubscribe(COMPLETE, &on_complete);
/// ```
pub struct EventEmitter {
    id: EmitterId,

    /// Event type -> ordered bindings
    registry: RefCell<ListenerRegistry>,

    /// Dispatches currently unwinding on this emitter
    depth: Cell<usize>,

    /// One-shot bindings already invoked, removed when depth returns to 0
    pending_once: RefCell<Vec<Binding>>,

    /// Records for `dispatch_by_type`
    pool: Rc<EventPool>,

    /// Trace every dispatch
    debug_mode: bool,
}

impl EventEmitter {
    /// Emitter with a private, unbounded pool
    pub fn new() -> Self {
        Self::with_pool(Rc::new(EventPool::new()))
    }

    /// Emitter drawing `dispatch_by_type` records from a shared pool
    pub fn with_pool(pool: Rc<EventPool>) -> Self {
        Self {
            id: EmitterId::next(),
            registry: RefCell::new(ListenerRegistry::new()),
            depth: Cell::new(0),
            pending_once: RefCell::new(Vec::new()),
            pool,
            debug_mode: false,
        }
    }

    /// Emitter with a private pool built from `config`
    pub fn with_config(config: &EventsConfig) -> Self {
        Self::with_pool(Rc::new(EventPool::with_config(&config.pool)))
            .with_debug_mode(config.is_debug_mode())
    }

    pub fn with_debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    pub fn id(&self) -> EmitterId {
        self.id
    }

    pub fn pool(&self) -> &Rc<EventPool> {
        &self.pool
    }

    /// Current notify depth (0 when no dispatch is running)
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register `listener` for `event_type`.
    ///
    /// Returns false without changing anything if the listener is already
    /// registered for this type.
    pub fn subscribe(&self, event_type: &str, listener: &Listener) -> bool {
        self.add_binding(event_type, listener, false)
    }

    /// Register `listener` for a single notification. It is removed after the
    /// dispatch that invokes it.
    pub fn subscribe_once(&self, event_type: &str, listener: &Listener) -> bool {
        self.add_binding(event_type, listener, true)
    }

    /// [`subscribe`](Self::subscribe), rejecting an empty event type
    pub fn try_subscribe(&self, event_type: &str, listener: &Listener) -> Result<bool> {
        validate_event_type(event_type)?;
        Ok(self.subscribe(event_type, listener))
    }

    /// [`subscribe_once`](Self::subscribe_once), rejecting an empty event type
    pub fn try_subscribe_once(&self, event_type: &str, listener: &Listener) -> Result<bool> {
        validate_event_type(event_type)?;
        Ok(self.subscribe_once(event_type, listener))
    }

    /// Remove `listener` from `event_type`. No effect if it is not registered.
    pub fn unsubscribe(&self, event_type: &str, listener: &Listener) -> bool {
        self.remove_binding(event_type, listener.id())
    }

    /// Remove every listener for `event_type`
    pub fn remove_all(&self, event_type: &str) -> usize {
        let removed = self.registry.borrow_mut().remove_all(event_type);
        if removed > 0 {
            debug!(emitter_id = %self.id, event_type, removed, "Removed all event listeners");
        }
        removed
    }

    /// Remove every listener for every type
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
        debug!(emitter_id = %self.id, "Cleared event listeners");
    }

    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.registry.borrow().contains(event_type)
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.registry.borrow().len(event_type)
    }

    /// Types with at least one listener, sorted
    pub fn event_types(&self) -> Vec<String> {
        self.registry.borrow().event_types()
    }

    fn add_binding(&self, event_type: &str, listener: &Listener, once: bool) -> bool {
        let binding = Binding::new(Rc::from(event_type), listener.clone(), self.id, once);
        let added = self.registry.borrow_mut().insert(binding);

        if added {
            debug!(
                emitter_id = %self.id,
                event_type,
                listener_id = %listener.id(),
                once,
                "Registered event listener"
            );
        } else {
            trace!(
                emitter_id = %self.id,
                event_type,
                listener_id = %listener.id(),
                "Listener already registered"
            );
        }
        added
    }

    fn remove_binding(&self, event_type: &str, listener: ListenerId) -> bool {
        let removed = self
            .registry
            .borrow_mut()
            .remove(event_type, listener, self.id);

        if removed {
            debug!(
                emitter_id = %self.id,
                event_type,
                listener_id = %listener,
                "Unregistered event listener"
            );
        }
        removed
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Dispatch `event` to every listener registered for its type.
    ///
    /// Sets the event target to this emitter. Returns false if a listener
    /// called [`Event::prevent_default`] on a cancelable event; true otherwise,
    /// including when nobody listens.
    pub fn dispatch(&self, event: &Event) -> bool {
        event.set_target(Some(self.id));

        let Some(list) = self.registry.borrow().snapshot(event.event_type()) else {
            return true;
        };

        {
            let _guard = NotifyGuard::enter(&self.depth);

            if self.debug_mode {
                trace!(
                    emitter_id = %self.id,
                    event_type = event.event_type(),
                    listeners = list.len(),
                    depth = self.depth.get(),
                    "Dispatching event"
                );
            }

            for binding in list.iter() {
                binding.listener.call(event);
                if binding.once {
                    self.pending_once.borrow_mut().push(binding.clone());
                }
            }
        }

        if self.depth.get() == 0 {
            self.flush_once();
        }

        !event.is_default_prevented()
    }

    /// Dispatch a pooled event of `event_type`.
    ///
    /// Does nothing and returns true when nobody listens, without touching
    /// the pool.
    pub fn dispatch_by_type(&self, event_type: &str, cancelable: bool) -> bool {
        if !self.has_listeners(event_type) {
            return true;
        }

        let event = self.pool.obtain(event_type, cancelable);
        let result = self.dispatch(&event);
        event.set_target(None);
        self.pool.release(event);
        result
    }

    fn flush_once(&self) {
        loop {
            let Some(binding) = self.pending_once.borrow_mut().pop() else {
                break;
            };
            trace!(
                emitter_id = %self.id,
                event_type = %binding.event_type,
                listener_id = %binding.listener.id(),
                "Removing one-shot listener"
            );
            self.remove_binding(&binding.event_type, binding.listener.id());
        }
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("id", &self.id)
            .field("event_types", &self.event_types())
            .field("depth", &self.depth.get())
            .finish()
    }
}

fn validate_event_type(event_type: &str) -> Result<()> {
    if event_type.is_empty() {
        return Err(Error::invalid_argument("event type must not be empty"));
    }
    Ok(())
}
