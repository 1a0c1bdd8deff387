//! # customer-stripe
//!
//! Stripe customer provider for stripe-customer-bridge.
//!
//! `StripeCustomerProvider` implements `CustomerProvider` over the Stripe
//! Customers REST API, pinned to API version `2022-11-15`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use customer_stripe::{StripeConfig, StripeCustomerProvider};
//! use customer_core::{CustomerProvider, CustomerRecord};
//!
//! let provider = StripeCustomerProvider::new(StripeConfig::from_env()?)?;
//!
//! let created = provider.create_customer(&record.to_new_customer()).await?;
//! println!("Stripe customer {}", created.id);
//! ```

pub mod config;
pub mod customers;

// Re-exports
pub use config::{StripeConfig, STRIPE_API_BASE_URL, STRIPE_API_VERSION};
pub use customers::{StripeClient, StripeCustomerProvider};
