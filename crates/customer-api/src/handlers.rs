//! # Request Handlers
//!
//! Axum request handlers for the customer bridge.

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use customer_core::{CustomerEnvelope, CustomerRecord};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "customer-bridge",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a customer at the payments provider.
///
/// Always answers 200: failures are reported in the envelope's `error` and
/// `code` fields, never through the HTTP status.
#[instrument(
    skip(state, record),
    fields(
        request_id = %Uuid::new_v4(),
        cms_id = ?record.id,
        provider = state.provider.provider_name()
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(record): Json<CustomerRecord>,
) -> Json<CustomerEnvelope> {
    let input = record.to_new_customer();
    let result = state.provider.create_customer(&input).await;

    match &result {
        Ok(customer) => info!("Created customer: stripe_id={}", customer.id),
        Err(e) => warn!(kind = e.kind(), "Failed to create customer: {}", e),
    }

    Json(CustomerEnvelope::from_result(&result))
}
