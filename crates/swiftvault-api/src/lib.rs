//! SwiftVault REST API
//!
//! Thin transport adapter over the ledger engine. Handlers validate request
//! shape, call the engine with already-typed arguments, and translate
//! results and error kinds into HTTP responses.
//!
//! # API Structure
//!
//! ```text
//! /api/v1/
//! └── /wallets
//!     ├── POST /              - Create a wallet
//!     ├── GET  /              - List wallets (creation order)
//!     ├── POST /transfer      - Transfer between wallets
//!     ├── GET  /{id}          - Wallet with history (newest first)
//!     └── POST /{id}/fund     - Fund a wallet
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Enable CORS for browser clients
    pub enable_cors: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_tracing: true,
        }
    }
}

/// Create the main API router with all middleware
pub fn create_router(state: Arc<AppState>, config: ApiConfig) -> Router {
    let mut router = Router::new()
        // API v1 routes
        .nest("/api/v1", routes::api_v1_routes())
        // Health check at root
        .route("/health", axum::routing::get(handlers::health::health_check))
        // OpenAPI documentation
        .merge(routes::swagger_routes())
        // Shared state
        .with_state(state);

    if config.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    if config.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Create a minimal router for testing
pub fn create_test_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_v1_routes())
        .route("/health", axum::routing::get(handlers::health::health_check))
        .with_state(state)
}
