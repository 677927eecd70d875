//! # kindle-desktop
//!
//! Desktop collaborators built on the kindle-foundation event system.
//! Each embeds an [`EventEmitter`](kindle_foundation::EventEmitter) and
//! implements [`EventTarget`](kindle_foundation::EventTarget).
//!
//! ## Events
//! - [`NativeWindow`]: `resizing` (cancelable), `resize`, `activate`, `deactivate`
//! - [`ResourceLoader`]: `complete`, `ioError`

pub mod error;
pub mod loader;
pub mod window;

pub use error::{DesktopError, Result};
pub use loader::ResourceLoader;
pub use window::NativeWindow;
