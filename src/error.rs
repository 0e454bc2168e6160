//! Error types for html-inline library.

use std::io;
use thiserror::Error;

/// Result type alias for html-inline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around rendering.
///
/// Rendering itself never fails: malformed markup degrades instead of being
/// rejected. Errors only come from reading inputs and loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be deserialized.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_config_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
