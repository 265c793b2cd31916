//! Error types for configuration fetchers.
//!
//! The cache layer is a pure pass-through: whatever error a fetcher
//! produces is propagated to the caller unchanged, never retried and
//! never cached.

use thiserror::Error;

/// Errors that can occur when fetching configuration.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested configuration does not exist upstream.
    #[error("configuration not found for {application}/{profile}/{label}")]
    NotFound {
        /// Application name that was requested.
        application: String,
        /// Profile that was requested.
        profile: String,
        /// Label that was requested.
        label: String,
    },

    /// The configuration source is not reachable.
    #[error("source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// A timeout occurred while waiting for the source.
    #[error("operation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The identity triple was rejected before reaching the source.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other fetch failure.
    #[error("fetch failed: {message}")]
    Other {
        /// Description of what went wrong.
        message: String,
        /// Underlying error, if any.
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FetchError {
    /// Creates a NotFound error.
    pub fn not_found(
        application: impl Into<String>,
        profile: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            application: application.into(),
            profile: profile.into(),
            label: label.into(),
        }
    }

    /// Creates a SourceUnavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates a Timeout error.
    pub fn timeout(seconds: u64) -> Self {
        Self::Timeout { seconds }
    }

    /// Creates an InvalidRequest error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates an Other error without a cause.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates an Other error with an underlying cause.
    pub fn other_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Returns true if this error indicates the config was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. } | Self::Timeout { .. })
    }
}
