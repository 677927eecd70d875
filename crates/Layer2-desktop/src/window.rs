//! NativeWindow - window state that announces its changes as events
//!
//! Resizing is two-phase: a cancelable `RESIZING` is dispatched first and
//! any listener may veto it with `prevent_default()`; only then is the size
//! applied and `RESIZE` dispatched.

use kindle_foundation::{
    EventEmitter, EventPool, EventTarget, ACTIVATE, DEACTIVATE, RESIZE, RESIZING,
};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

pub struct NativeWindow {
    events: EventEmitter,
    size: Cell<(u32, u32)>,
    active: Cell<bool>,
}

impl NativeWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_emitter(EventEmitter::new(), width, height)
    }

    /// Window drawing event records from a shared pool
    pub fn with_pool(pool: Rc<EventPool>, width: u32, height: u32) -> Self {
        Self::with_emitter(EventEmitter::with_pool(pool), width, height)
    }

    pub fn with_emitter(events: EventEmitter, width: u32, height: u32) -> Self {
        Self {
            events,
            size: Cell::new((width, height)),
            active: Cell::new(false),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Resize to `width` x `height`.
    ///
    /// Returns true if the size changed; false if it was already that size or
    /// a `RESIZING` listener prevented it.
    pub fn resize(&self, width: u32, height: u32) -> bool {
        if self.size.get() == (width, height) {
            return false;
        }
        if !self.events.dispatch_by_type(RESIZING, true) {
            debug!(width, height, "Resize prevented");
            return false;
        }

        self.size.set((width, height));
        self.events.dispatch_by_type(RESIZE, false);
        true
    }

    /// Make the window active. Dispatches `ACTIVATE` on change only.
    pub fn activate(&self) -> bool {
        if self.active.replace(true) {
            return false;
        }
        self.events.dispatch_by_type(ACTIVATE, false);
        true
    }

    /// Make the window inactive. Dispatches `DEACTIVATE` on change only.
    pub fn deactivate(&self) -> bool {
        if !self.active.replace(false) {
            return false;
        }
        self.events.dispatch_by_type(DEACTIVATE, false);
        true
    }
}

impl EventTarget for NativeWindow {
    fn emitter(&self) -> &EventEmitter {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindle_foundation::Listener;
    use std::cell::RefCell;

    #[test]
    fn test_resize_dispatches_both_phases() {
        let window = NativeWindow::new(800, 600);
        let log = Rc::new(RefCell::new(Vec::new()));
        for event_type in [RESIZING, RESIZE] {
            let log = Rc::clone(&log);
            window.subscribe(
                event_type,
                &Listener::new(move |event| log.borrow_mut().push(event.event_type().to_string())),
            );
        }

        assert!(window.resize(1024, 768));
        assert_eq!(window.size(), (1024, 768));
        assert_eq!(*log.borrow(), vec!["resizing", "resize"]);
    }

    #[test]
    fn test_resizing_veto_keeps_size() {
        let window = NativeWindow::new(800, 600);
        let resized = Rc::new(RefCell::new(false));
        {
            let resized = Rc::clone(&resized);
            window.subscribe(RESIZE, &Listener::new(move |_| *resized.borrow_mut() = true));
        }
        window.subscribe(RESIZING, &Listener::new(|event| event.prevent_default()));

        assert!(!window.resize(1024, 768));
        assert_eq!(window.size(), (800, 600));
        assert!(!*resized.borrow());
    }

    #[test]
    fn test_resize_to_same_size_is_noop() {
        let window = NativeWindow::new(800, 600);
        assert!(!window.resize(800, 600));
        assert!(window.resize(640, 480));
    }

    #[test]
    fn test_activate_deactivate_on_change_only() {
        let window = NativeWindow::new(100, 100);
        let count = Rc::new(RefCell::new(0));
        for event_type in [ACTIVATE, DEACTIVATE] {
            let count = Rc::clone(&count);
            window.subscribe(event_type, &Listener::new(move |_| *count.borrow_mut() += 1));
        }

        assert!(window.activate());
        assert!(!window.activate());
        assert!(window.is_active());
        assert!(window.deactivate());
        assert!(!window.deactivate());

        assert_eq!(*count.borrow(), 2);
    }
}
