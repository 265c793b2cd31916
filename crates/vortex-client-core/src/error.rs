//! Error types for the core domain model.
//!
//! Rendering a configuration artifact to a text format is the only
//! fallible operation in this crate; everything else is plain data access.

use thiserror::Error;

/// Errors produced when working with the configuration artifact model.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to render the configuration to a text format.
    #[error("failed to serialize configuration to {format}: {message}")]
    Serialize {
        /// Target format ("json" or "yaml").
        format: String,
        /// Description of the underlying serializer error.
        message: String,
    },
}

impl ConfigError {
    /// Creates a Serialize error.
    pub fn serialize(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialize {
            format: format.into(),
            message: message.into(),
        }
    }
}

/// Type alias for Results with ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;
