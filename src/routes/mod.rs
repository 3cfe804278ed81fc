//! Route definitions for the Greatea inventory API

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Entity CRUD
        .nest("/supplies", supply_routes())
        .nest("/suppliers", supplier_routes())
        .nest("/expenses", expense_routes())
        .nest("/usage", usage_routes())
        .nest("/orders", order_routes())
        .nest("/stock", stock_routes())
        .nest("/restocks", restock_routes())
        .nest("/purchases", purchase_routes())
        // Derived reports
        .nest("/analytics", analytics_routes())
        .route("/dashboard/summary", get(handlers::get_dashboard_summary))
}

/// Supply catalog routes
fn supply_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_supplies).post(handlers::create_supply),
        )
        .route(
            "/:id",
            get(handlers::get_supply).delete(handlers::delete_supply),
        )
}

/// Supplier registry routes
fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_suppliers).post(handlers::create_supplier),
        )
        .route("/:id", delete(handlers::delete_supplier))
}

/// Expense ledger routes
fn expense_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route("/:id", delete(handlers::delete_expense))
}

/// Usage record routes
fn usage_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_usage).post(handlers::create_usage))
        .route("/:id", delete(handlers::delete_usage))
}

/// Supply order routes
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_orders).post(handlers::create_order))
        .route("/:id", delete(handlers::delete_order))
}

/// Store stock routes
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_stock).post(handlers::create_stock))
        .route("/:id", delete(handlers::delete_stock))
}

/// Restock request routes
fn restock_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_restocks).post(handlers::create_restock),
        )
        .route("/:id", delete(handlers::delete_restock))
}

/// Market purchase routes
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_purchases).post(handlers::create_purchase),
        )
        .route("/:id", delete(handlers::delete_purchase))
}

/// Analytics routes
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/expiring-soon", get(handlers::get_expiring_soon))
        .route("/stock-alerts", get(handlers::get_stock_alerts))
        .route("/spending-trends", get(handlers::get_spending_trends))
}
