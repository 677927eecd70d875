//! Desktop-specific error types
//!
//! DesktopError covers collaborator failures that are not delivered as events.
//! Converts into kindle_foundation::Error.

use kindle_foundation::Error as FoundationError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, DesktopError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A load failed and nobody listens for io-error events
    #[error("Load failed: {0}")]
    Load(String),

    /// Caller passed an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<DesktopError> for FoundationError {
    fn from(err: DesktopError) -> Self {
        match err {
            DesktopError::Load(msg) => FoundationError::Io(std::io::Error::other(msg)),
            DesktopError::InvalidArgument(msg) => FoundationError::InvalidArgument(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_foundation_error() {
        let err: FoundationError = DesktopError::InvalidArgument("empty buffer".into()).into();
        assert!(matches!(err, FoundationError::InvalidArgument(_)));

        let err: FoundationError = DesktopError::Load("Stream Error".into()).into();
        assert!(matches!(err, FoundationError::Io(_)));
        assert!(err.to_string().contains("Stream Error"));
    }
}
