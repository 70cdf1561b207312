//! Custom error types for the cover dialog crate
//!
//! This module defines the error hierarchy using thiserror for ergonomic
//! error definitions. The dialog layer itself is infallible by design;
//! errors come from the injected category store and the demo's data loading.

use thiserror::Error;

/// The main error type for cover dialog operations
#[derive(Error, Debug)]
pub enum CoverError {
    /// Category store errors (the injected read capability failed)
    #[error("Category store error: {0}")]
    Store(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CoverError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CoverError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cover dialog operations
pub type CoverResult<T> = Result<T, CoverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoverError::Store("backing file missing".into());
        assert_eq!(err.to_string(), "Category store error: backing file missing");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoverError = io_err.into();
        assert!(matches!(err, CoverError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: CoverError = json_err.into();
        assert!(matches!(err, CoverError::Json(_)));
    }
}
