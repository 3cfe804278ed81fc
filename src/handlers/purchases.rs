//! HTTP handlers for market purchases

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::purchases::{CreatePurchaseInput, MarketPurchase, MarketPurchaseService};
use crate::AppState;

/// List all market purchases
pub async fn list_purchases(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MarketPurchase>>> {
    let service = MarketPurchaseService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Record a market purchase
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(input): Json<CreatePurchaseInput>,
) -> AppResult<(StatusCode, Json<MarketPurchase>)> {
    let service = MarketPurchaseService::new(state.db);
    let purchase = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

/// Delete a market purchase
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = MarketPurchaseService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
