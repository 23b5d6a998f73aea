//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Create API v1 routes
pub fn api_v1_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/wallets", wallet_routes())
}

/// Wallet routes
fn wallet_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            post(handlers::wallet::create_wallet).get(handlers::wallet::list_wallets),
        )
        .route("/transfer", post(handlers::wallet::transfer))
        .route("/:id", get(handlers::wallet::get_wallet))
        .route("/:id/fund", post(handlers::wallet::fund_wallet))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use crate::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
