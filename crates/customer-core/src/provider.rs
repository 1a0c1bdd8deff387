//! # Customer Provider Trait
//!
//! Seam between the HTTP endpoint and a payments provider that can create
//! customer records. Stripe is the only implementation today; tests plug in
//! their own.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │        CustomerProvider (trait)             │
//! │  ├── create_customer()                      │
//! │  └── provider_name()                        │
//! └─────────────────────────────────────────────┘
//!                      ▲
//!          ┌───────────┴───────────┐
//!  ┌───────┴────────┐      ┌───────┴───────┐
//!  │ StripeCustomer │      │  test fakes   │
//!  │   Provider     │      │               │
//!  └────────────────┘      └───────────────┘
//! ```

use crate::customer::{NewCustomer, ProviderCustomer};
use crate::error::CustomerResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A payments provider able to create customer records.
#[async_trait]
pub trait CustomerProvider: Send + Sync {
    /// Create a customer record at the provider.
    ///
    /// Every call creates a new record; there is no deduplication.
    async fn create_customer(&self, customer: &NewCustomer) -> CustomerResult<ProviderCustomer>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedCustomerProvider = Arc<dyn CustomerProvider>;
