//! Error types for Kindle
//!
//! Dispatch itself never fails: duplicate subscriptions, removal of absent
//! listeners and dispatch of unknown types are defined no-ops. The variants
//! below cover registration contracts and configuration I/O.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Kindle error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Registration contract
    // ========================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ========================================================================
    // External error conversions
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error stems from caller input rather than the environment
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::Config(_))
    }

    /// Invalid-argument helper
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}
