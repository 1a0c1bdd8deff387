//! # customer-api
//!
//! HTTP API layer for stripe-customer-bridge.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The create-customer endpoint used by the CMS
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/stripe/createCustomer` | Create a Stripe customer |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, CREATE_CUSTOMER_PATH};
pub use state::{AppConfig, AppState};
