//! Repository error taxonomy
//!
//! Live-path failures (network, non-success status, schema mismatch) carry
//! enough structure for the caller's retry policy. Demo-path missing-entity
//! mutations convert from the store's error. "Not found" on reads is not an
//! error in either mode; repositories return `None`.

use mirage_store::StoreError;

/// Errors surfaced by repositories
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure before any response arrived
    #[error("network failure: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-success status
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        body: serde_json::Value,
    },

    /// The response did not match the expected shape
    #[error("response schema mismatch: {message}")]
    Schema { message: String },

    /// Demo-path mutation targeted a nonexistent entity
    #[error(transparent)]
    MissingEntity(#[from] StoreError),
}

impl ApiError {
    /// Network failure without an underlying cause
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Schema mismatch with a human-readable description
    #[inline]
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Status code, when the failure carries one
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a retry could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Schema { .. } | Self::MissingEntity(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema {
            message: err.to_string(),
        }
    }
}
