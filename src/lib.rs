//! Greatea Inventory Backend
//!
//! Records supplies, suppliers, expenses, purchase orders, usage, store
//! stock, restock requests, and market purchases for a small bubble-tea
//! operation, and derives expiry, stock-alert, spending-trend, and dashboard
//! reports from the current data.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Greatea Inventory API is running."
}

/// Catch-all for unmatched routes
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(error::ErrorResponse {
            error: "Resource not found".to_string(),
        }),
    )
}
