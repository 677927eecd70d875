//! Event Pool - free list of reusable event records
//!
//! Used by [`EventEmitter::dispatch_by_type`](super::EventEmitter::dispatch_by_type)
//! so hot paths (per-frame, per-callback) do not allocate a record per call.
//! A pool is shared between emitters through `Rc` and never frees records on
//! its own; call [`EventPool::clear`] to release them.

use super::types::Event;
use crate::config::PoolConfig;
use std::cell::{Cell, RefCell};
use tracing::trace;

/// Pool counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Records constructed by [`EventPool::obtain`] or preallocation
    pub created: u64,
    /// Records handed out again instead of constructing
    pub reused: u64,
    /// Records currently waiting in the pool
    pub available: usize,
}

#[derive(Debug, Default)]
pub struct EventPool {
    free: RefCell<Vec<Event>>,
    /// None = unbounded
    capacity: Option<usize>,
    created: Cell<u64>,
    reused: Cell<u64>,
}

impl EventPool {
    /// Unbounded pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool that retains at most `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            free: RefCell::new(Vec::with_capacity(capacity)),
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    pub fn with_config(config: &PoolConfig) -> Self {
        let pool = match config.capacity {
            Some(capacity) => Self::with_capacity(capacity),
            None => Self::new(),
        };

        let count = match config.capacity {
            Some(capacity) => config.preallocate_count().min(capacity),
            None => config.preallocate_count(),
        };
        if count > 0 {
            let mut free = pool.free.borrow_mut();
            // type is filled in by `obtain` on reuse
            free.extend((0..count).map(|_| Event::new(String::new(), false)));
            pool.created.set(count as u64);
        }

        pool
    }

    /// Take one retired record, if any
    pub fn acquire(&self) -> Option<Event> {
        self.free.borrow_mut().pop()
    }

    /// Return a retired record. Its target must already be cleared.
    pub fn release(&self, event: Event) {
        debug_assert!(event.target().is_none(), "released event still has a target");

        let mut free = self.free.borrow_mut();
        if let Some(capacity) = self.capacity {
            if free.len() >= capacity {
                trace!(capacity, "Event pool full, dropping record");
                return;
            }
        }
        free.push(event);
    }

    /// Reuse a record reinitialized to `(event_type, cancelable)`, or construct one
    pub fn obtain(&self, event_type: &str, cancelable: bool) -> Event {
        match self.acquire() {
            Some(mut event) => {
                event.reinit(event_type, cancelable);
                self.reused.set(self.reused.get() + 1);
                event
            }
            None => {
                self.created.set(self.created.get() + 1);
                Event::new(event_type, cancelable)
            }
        }
    }

    /// Drop every retained record
    pub fn clear(&self) {
        let mut free = self.free.borrow_mut();
        let dropped = free.len();
        free.clear();
        free.shrink_to_fit();
        trace!(dropped, "Cleared event pool");
    }

    pub fn len(&self) -> usize {
        self.free.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.borrow().is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.get(),
            reused: self.reused.get(),
            available: self.len(),
        }
    }
}
