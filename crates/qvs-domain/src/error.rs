//! Error handling types

use crate::constants::{ERROR_CATEGORY_MISSING_INPUT, ERROR_CATEGORY_SERVER};
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Quantized Visual Search
#[derive(Error, Debug)]
pub enum Error {
    /// Client supplied a missing or malformed query
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input
        message: String,
    },

    /// Persisted catalog could not be turned into an index
    #[error("Index load error: {message}")]
    IndexLoad {
        /// Description of the load failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unexpected failure while serving a request
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Error category reported to callers of the query contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid input, correctable by the client
    MissingInput,
    /// Any other failure, reported without internals
    ServerError,
}

impl ErrorCategory {
    /// Wire representation of the category
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingInput => ERROR_CATEGORY_MISSING_INPUT,
            Self::ServerError => ERROR_CATEGORY_SERVER,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an index load error
    pub fn index_load<S: Into<String>>(message: S) -> Self {
        Self::IndexLoad {
            message: message.into(),
            source: None,
        }
    }

    /// Create an index load error with source
    pub fn index_load_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::IndexLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Category this error is reported under
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Base64(_) => ErrorCategory::MissingInput,
            _ => ErrorCategory::ServerError,
        }
    }

    /// Whether the client can correct this error by changing the request
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::MissingInput
    }
}
