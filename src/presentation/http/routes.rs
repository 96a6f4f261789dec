//! Route Configuration
//!
//! Configures all HTTP routes for the API. The three resource slices are
//! instantiations of the same generic CRUD router with different DTO types.

use axum::{routing::get, Router};

use super::handlers;
use super::handlers::crud::crud_router;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/beer", crud_router(state.beers_v1))
        .nest("/api/v2/beer", crud_router(state.beers_v2))
        .nest("/api/v1/customer", crud_router(state.customers))
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
}
