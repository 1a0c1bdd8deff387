//! Common test utilities for customer-api integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use customer_api::{create_router, AppConfig, AppState};
use customer_core::{
    BoxedCustomerProvider, CustomerError, CustomerProvider, CustomerResult, NewCustomer,
    ProviderCustomer,
};

/// What the fake provider answers with
#[derive(Clone)]
pub enum FakeOutcome {
    /// Succeed, ids are `<prefix>_<n>` where n counts calls from 1
    Succeed(&'static str),
    /// Fail with a provider error carrying this message
    Reject(&'static str),
    /// Fail as if the provider were unreachable
    Unreachable,
}

/// In-memory provider recording every create-customer call.
pub struct FakeProvider {
    outcome: FakeOutcome,
    calls: Mutex<Vec<NewCustomer>>,
}

impl FakeProvider {
    pub fn new(outcome: FakeOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<NewCustomer> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomerProvider for FakeProvider {
    async fn create_customer(&self, customer: &NewCustomer) -> CustomerResult<ProviderCustomer> {
        let count = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(customer.clone());
            calls.len()
        };

        match self.outcome {
            FakeOutcome::Succeed(prefix) => {
                Ok(ProviderCustomer::new(format!("{}_{}", prefix, count)))
            }
            FakeOutcome::Reject(message) => Err(CustomerError::Provider {
                provider: "fake".to_string(),
                message: message.to_string(),
            }),
            FakeOutcome::Unreachable => Err(CustomerError::Network(
                "error sending request for url (http://127.0.0.1:1/v1/customers)".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

/// Build a test server around any provider
pub fn server_with(provider: BoxedCustomerProvider) -> TestServer {
    let state = AppState::with_provider(provider, AppConfig::default());
    TestServer::new(create_router(state)).expect("Failed to create test server")
}
