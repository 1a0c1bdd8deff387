//! # Customer Error Types
//!
//! Typed error handling for customer creation.
//! Every provider operation returns `Result<T, CustomerError>`.
//!
//! The variants exist for logging. Callers of the HTTP endpoint never see the
//! distinction: the response envelope only carries [`CustomerError::message`].

use thiserror::Error;

/// Core error type for customer creation
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Configuration errors (missing or malformed keys)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider rejected the request
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider response could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CustomerError {
    /// Human-readable description of the failure.
    ///
    /// Provider errors yield the provider's own message verbatim, the way its
    /// SDK would surface it. Every other variant yields its inner description.
    pub fn message(&self) -> &str {
        match self {
            CustomerError::Provider { message, .. } => message,
            CustomerError::Configuration(msg)
            | CustomerError::Network(msg)
            | CustomerError::Serialization(msg) => msg,
        }
    }

    /// Short machine-friendly label, used as a tracing field
    pub fn kind(&self) -> &'static str {
        match self {
            CustomerError::Configuration(_) => "configuration",
            CustomerError::Provider { .. } => "provider",
            CustomerError::Network(_) => "network",
            CustomerError::Serialization(_) => "serialization",
        }
    }
}

/// Result type alias for customer operations
pub type CustomerResult<T> = Result<T, CustomerError>;
