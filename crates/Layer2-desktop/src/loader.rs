//! ResourceLoader - loads bytes and reports the outcome as events
//!
//! - success: data is stored, then `COMPLETE` is dispatched
//! - failure: an `IO_ERROR` event carrying the reason is dispatched when
//!   somebody listens for it; otherwise the failure is returned as
//!   [`DesktopError::Load`]

use crate::error::{DesktopError, Result};
use kindle_foundation::{Event, EventEmitter, EventPool, EventTarget, COMPLETE, IO_ERROR};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

pub struct ResourceLoader {
    events: EventEmitter,
    data: RefCell<Option<Rc<[u8]>>>,
    current_path: RefCell<Option<PathBuf>>,
}

impl ResourceLoader {
    pub fn new() -> Self {
        Self::with_emitter(EventEmitter::new())
    }

    /// Loader drawing `COMPLETE` records from a shared pool
    pub fn with_pool(pool: Rc<EventPool>) -> Self {
        Self::with_emitter(EventEmitter::with_pool(pool))
    }

    pub fn with_emitter(events: EventEmitter) -> Self {
        Self {
            events,
            data: RefCell::new(None),
            current_path: RefCell::new(None),
        }
    }

    /// Data from the last successful load
    pub fn data(&self) -> Option<Rc<[u8]>> {
        self.data.borrow().clone()
    }

    /// Path of the last file load (None after `load_bytes`)
    pub fn current_path(&self) -> Option<PathBuf> {
        self.current_path.borrow().clone()
    }

    /// Read the file at `path`
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        *self.current_path.borrow_mut() = Some(path.clone());
        debug!(path = %path.display(), "Loading resource");

        let outcome: std::result::Result<Rc<[u8]>, String> = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => {
                Err(format!("Loaded file is empty. Path: {}", path.display()))
            }
            Ok(bytes) => Ok(Rc::from(bytes)),
            Err(e) => Err(format!("Stream Error. Path: {}: {}", path.display(), e)),
        };
        self.finish(outcome)
    }

    /// Take the data from an in-memory buffer
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Err(DesktopError::InvalidArgument(
                "load_bytes() requires a buffer with length greater than 0".to_string(),
            ));
        }
        *self.current_path.borrow_mut() = None;
        self.finish(Ok(Rc::from(bytes)))
    }

    fn finish(&self, outcome: std::result::Result<Rc<[u8]>, String>) -> Result<()> {
        match outcome {
            Ok(data) => {
                debug!(bytes = data.len(), "Resource loaded");
                *self.data.borrow_mut() = Some(data);
                self.events.dispatch_by_type(COMPLETE, false);
                Ok(())
            }
            Err(text) => {
                *self.data.borrow_mut() = None;
                if !self.events.has_listeners(IO_ERROR) {
                    return Err(DesktopError::Load(text));
                }
                debug!(reason = %text, "Resource load failed");
                self.events.dispatch(&Event::with_text(IO_ERROR, false, text));
                Ok(())
            }
        }
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTarget for ResourceLoader {
    fn emitter(&self) -> &EventEmitter {
        &self.events
    }
}
