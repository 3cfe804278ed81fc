//! Analytics and dashboard handlers
//!
//! Every report takes "today" as its reference point and recomputes from the
//! current data on each request.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::AppResult;
use crate::services::reporting::{
    DashboardSummary, ExpiringSupply, ReportingService, SpendingTrends, StockAlert,
};
use crate::AppState;

/// Supplies expiring within the next 30 days
pub async fn get_expiring_soon(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ExpiringSupply>>> {
    let service = ReportingService::new(state.db);
    let report = service.expiring_soon(Utc::now().date_naive()).await?;
    Ok(Json(report))
}

/// Alerts for store stock running low
pub async fn get_stock_alerts(State(state): State<AppState>) -> AppResult<Json<Vec<StockAlert>>> {
    let service = ReportingService::new(state.db);
    let report = service.stock_alerts(Utc::now().date_naive()).await?;
    Ok(Json(report))
}

/// Monthly spending grouped by category
pub async fn get_spending_trends(State(state): State<AppState>) -> AppResult<Json<SpendingTrends>> {
    let service = ReportingService::new(state.db);
    let report = service.spending_trends().await?;
    Ok(Json(report))
}

/// Dashboard KPI summary
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let service = ReportingService::new(state.db);
    let report = service.dashboard_summary(Utc::now().date_naive()).await?;
    Ok(Json(report))
}
