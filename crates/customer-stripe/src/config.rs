//! # Stripe Configuration
//!
//! Configuration management for the Stripe integration.
//! Secrets are loaded from environment variables once at startup and then
//! handed to the provider explicitly.

use customer_core::CustomerError;
use std::env;

/// Stripe API version every request is pinned to
pub const STRIPE_API_VERSION: &str = "2022-11-15";

/// Key prefixes able to call the Customers API (secret and restricted keys)
const SECRET_KEY_PREFIXES: [&str; 4] = ["sk_test_", "sk_live_", "rk_test_", "rk_live_"];

/// Default Stripe API base URL
pub const STRIPE_API_BASE_URL: &str = "https://api.stripe.com";

/// Stripe API configuration
#[derive(Clone)]
pub struct StripeConfig {
    /// Secret or restricted API key (sk_/rk_ + test_/live_)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIPE_SECRET_KEY`
    ///
    /// Optional:
    /// - `STRIPE_API_BASE_URL` (defaults to `https://api.stripe.com`)
    pub fn from_env() -> Result<Self, CustomerError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("STRIPE_SECRET_KEY").ok_or_else(|| {
            CustomerError::Configuration("STRIPE_SECRET_KEY not set".to_string())
        })?;

        if !SECRET_KEY_PREFIXES.iter().any(|p| secret_key.starts_with(p)) {
            return Err(CustomerError::Configuration(
                "STRIPE_SECRET_KEY must start with sk_test_, sk_live_, rk_test_ or rk_live_"
                    .to_string(),
            ));
        }

        let mut config = Self::new(secret_key);
        if let Some(url) = lookup("STRIPE_API_BASE_URL").filter(|u| !u.is_empty()) {
            config = config.with_api_base_url(url);
        }

        Ok(config)
    }

    /// Create config with an explicit secret key
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: STRIPE_API_BASE_URL.to_string(),
            api_version: STRIPE_API_VERSION.to_string(),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_") || self.secret_key.starts_with("rk_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.secret_key.starts_with("sk_live_") || self.secret_key.starts_with("rk_live_")
    }

    /// Non-secret part of the key, e.g. `rk_live_`
    fn key_prefix(&self) -> &str {
        SECRET_KEY_PREFIXES
            .iter()
            .find(|p| self.secret_key.starts_with(*p))
            .copied()
            .unwrap_or("")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("secret_key", &format_args!("{}***", self.key_prefix()))
            .field("api_base_url", &self.api_base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}
