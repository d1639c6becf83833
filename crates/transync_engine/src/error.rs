//! Error types for the sync engine.

use thiserror::Error;
use transync_catalog::CatalogError;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur during sync operations.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The connection parameters do not identify this provider.
    #[error("the \"{scheme}\" scheme is not supported; supported schemes are: \"{}\"", supported.join("\", \""))]
    UnsupportedScheme {
        /// Scheme that was given.
        scheme: String,
        /// Schemes this provider accepts.
        supported: Vec<String>,
    },

    /// A required connection field is missing.
    #[error("invalid DSN: missing {field}")]
    IncompleteDsn {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The DSN could not be parsed.
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),

    /// The remote answered with an unexpected status.
    #[error("unable to read the provider response (status {status}): {body}")]
    ProviderCommunication {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The operation is not available for this provider.
    #[error("method {0} not implemented")]
    NotImplemented(&'static str),

    /// Network or transport error.
    #[error("transport error: {message}")]
    Transport {
        /// Error message.
        message: String,
        /// Whether the operation can be retried.
        retryable: bool,
    },

    /// The remote answered with a payload of the wrong shape.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Downloaded content could not be decoded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl SyncError {
    /// Creates a retryable transport error.
    pub fn transport_retryable(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            retryable: true,
        }
    }

    /// Creates a non-retryable transport error.
    pub fn transport_fatal(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            retryable: false,
        }
    }

    /// Returns true if this error can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::Transport { retryable, .. } => *retryable,
            SyncError::ProviderCommunication { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
