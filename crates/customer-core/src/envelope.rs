//! # Response Envelope
//!
//! Uniform `{error, stripe_id, code}` body returned by the create-customer
//! endpoint, whatever the outcome.

use crate::customer::ProviderCustomer;
use crate::error::CustomerResult;
use serde::{Deserialize, Serialize};

/// Value of `stripe_id` when no customer was created
pub const STRIPE_ID_PLACEHOLDER: &str = "placeholder";

/// Create-customer response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerEnvelope {
    /// True when the provider call failed
    pub error: bool,

    /// Provider-assigned id, or [`STRIPE_ID_PLACEHOLDER`] on failure
    pub stripe_id: String,

    /// Failure description, empty on success
    pub code: String,
}

impl CustomerEnvelope {
    /// Successful creation
    pub fn created(stripe_id: impl Into<String>) -> Self {
        Self {
            stripe_id: stripe_id.into(),
            ..Self::default()
        }
    }

    /// Failed creation with a human-readable description
    pub fn failed(code: impl Into<String>) -> Self {
        Self {
            error: true,
            code: code.into(),
            ..Self::default()
        }
    }

    /// Build the envelope from a provider outcome
    pub fn from_result(result: &CustomerResult<ProviderCustomer>) -> Self {
        match result {
            Ok(customer) => Self::created(customer.id.clone()),
            Err(err) => Self::failed(err.message()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }
}

impl Default for CustomerEnvelope {
    fn default() -> Self {
        Self {
            error: false,
            stripe_id: STRIPE_ID_PLACEHOLDER.to_string(),
            code: String::new(),
        }
    }
}
