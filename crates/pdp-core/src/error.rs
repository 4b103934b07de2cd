//! Product view error types.

use thiserror::Error;

use crate::ids::DatabaseId;

/// Errors that can occur while driving a product view.
///
/// Malformed product data never surfaces here; it degrades to empty strings
/// or to the "no variants" path. Only user actions and configuration I/O fail.
#[derive(Error, Debug)]
pub enum PdpError {
    /// The selected variation is not part of the current product.
    #[error("Variation {0} is not a variation of this product")]
    InvalidVariation(DatabaseId),

    /// A selection was attempted before the product became available.
    #[error("Product view is still loading")]
    NotReady,

    /// A selector value could not be read as a variation id.
    #[error("Invalid selection value: {0:?}")]
    InvalidSelectionValue(String),

    /// Configuration file could not be read.
    #[error("Failed to read config {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    /// Configuration file could not be parsed.
    #[error("Failed to parse config {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PdpError {
    fn from(e: serde_json::Error) -> Self {
        PdpError::SerializationError(e.to_string())
    }
}

impl From<toml::ser::Error> for PdpError {
    fn from(e: toml::ser::Error) -> Self {
        PdpError::SerializationError(e.to_string())
    }
}
