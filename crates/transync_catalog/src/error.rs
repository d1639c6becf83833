//! Error types for catalog decoding.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while decoding or encoding catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The content is not valid for the expected format.
    #[error("invalid {format} content: {message}")]
    InvalidFormat {
        /// Name of the format being decoded.
        format: &'static str,
        /// Error message.
        message: String,
    },

    /// A translation value has a type the format cannot represent.
    #[error("unsupported value for key \"{key}\"")]
    UnsupportedValue {
        /// Key carrying the value.
        key: String,
    },
}

impl CatalogError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            format,
            message: message.into(),
        }
    }
}
