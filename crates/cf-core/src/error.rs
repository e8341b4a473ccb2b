//! Error types for the cf tool
//!
//! Every error is local to a single command invocation: the interactive
//! loop prints it and keeps running. Nothing here is fatal except the
//! explicit quit signal, which is not an error at all.

use thiserror::Error;

/// Result type alias for cf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the cf tool
#[derive(Error, Debug)]
pub enum Error {
    /// The typed token matched no command or group name
    #[error("Command not found.")]
    CommandNotFound,

    /// The typed token is a prefix of two or more sibling names
    #[error("Command ambiguous.")]
    CommandAmbiguous,

    /// A double-quoted substring was never closed
    #[error("unterminated quote in command line")]
    UnterminatedQuote,

    /// A required credential is absent and cannot be prompted for
    #[error("{variable} not set.")]
    MissingCredential {
        /// Name of the environment variable that would supply the value
        variable: &'static str,
    },

    /// Failure reported by the remote DNS API
    #[error("{0}")]
    Api(String),

    /// The requested zone name did not resolve to a zone
    #[error("zone not found: {0}")]
    ZoneNotFound(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or stream I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a remote API error carrying the provider's error text
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a transport-level HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
