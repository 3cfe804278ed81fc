//! HTTP handlers for store stock

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::stock::{CreateStockInput, StoreStock, StoreStockService};
use crate::AppState;

/// List all store stock rows
pub async fn list_stock(State(state): State<AppState>) -> AppResult<Json<Vec<StoreStock>>> {
    let service = StoreStockService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Record a store stock level
pub async fn create_stock(
    State(state): State<AppState>,
    Json(input): Json<CreateStockInput>,
) -> AppResult<(StatusCode, Json<StoreStock>)> {
    let service = StoreStockService::new(state.db);
    let stock = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

/// Delete a store stock row
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = StoreStockService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
