//! # customer-core
//!
//! Core types and traits for the stripe-customer-bridge.
//!
//! This crate provides:
//! - `CustomerRecord`, the customer payload posted by the CMS
//! - `NewCustomer` and `ProviderCustomer`, the provider-facing shapes
//! - `CustomerEnvelope`, the uniform `{error, stripe_id, code}` response
//! - `CustomerProvider` trait for implementing payments providers
//! - `CustomerError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use customer_core::{CustomerEnvelope, CustomerRecord, CustomerProvider};
//!
//! let record: CustomerRecord = serde_json::from_slice(body)?;
//! let result = provider.create_customer(&record.to_new_customer()).await;
//! let envelope = CustomerEnvelope::from_result(&result);
//! ```

pub mod customer;
pub mod envelope;
pub mod error;
pub mod provider;

// Re-exports for convenience
pub use customer::{CustomerRecord, NewCustomer, ProviderCustomer, CMS_ID_METADATA_KEY};
pub use envelope::{CustomerEnvelope, STRIPE_ID_PLACEHOLDER};
pub use error::{CustomerError, CustomerResult};
pub use provider::{BoxedCustomerProvider, CustomerProvider};
