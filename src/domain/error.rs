//! Error types for the weatherdash plugin.
//!
//! This module defines the centralized error type [`WeatherdashError`] and a type
//! alias [`Result`] used throughout the crate. API failures are caught by the
//! controller and turned into display state, so these errors never reach the
//! rendering layer.

use thiserror::Error;

/// The main error type for weatherdash operations.
///
/// # Examples
///
/// ```
/// use weatherdash::WeatherdashError;
///
/// let err = WeatherdashError::Http { status: 503, body: "unavailable".to_string() };
/// assert_eq!(err.status(), Some(503));
/// assert_eq!(err.to_string(), "HTTP error! Status: 503");
/// ```
#[derive(Debug, Error)]
pub enum WeatherdashError {
    /// The backend answered with a non-success status.
    ///
    /// Zellij reports transport failures (connection refused, DNS) as a
    /// non-success status whose body carries the failure text, so both cases
    /// land here.
    #[error("HTTP error! Status: {status}")]
    Http {
        /// HTTP status code reported for the request.
        status: u16,
        /// Raw response body, lossily decoded as UTF-8.
        body: String,
    },

    /// The response body was not the JSON document the endpoint promises.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeatherdashError {
    /// Returns the HTTP status carried by an [`WeatherdashError::Http`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A specialized `Result` type for weatherdash operations.
pub type Result<T> = std::result::Result<T, WeatherdashError>;
