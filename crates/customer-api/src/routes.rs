//! # Routes
//!
//! Axum router configuration for the customer bridge.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Path of the create-customer endpoint
pub const CREATE_CUSTOMER_PATH: &str = "/api/stripe/createCustomer";

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check (also served at /)
/// - POST /api/stripe/createCustomer - Create a Stripe customer from a CMS record
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route(CREATE_CUSTOMER_PATH, post(handlers::create_customer))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
