//! HTTP handlers for supply orders

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::orders::{CreateOrderInput, SupplyOrder, SupplyOrderService};
use crate::AppState;

/// List all supply orders
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<SupplyOrder>>> {
    let service = SupplyOrderService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Record a supply order
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> AppResult<(StatusCode, Json<SupplyOrder>)> {
    let service = SupplyOrderService::new(state.db);
    let order = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Delete a supply order
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = SupplyOrderService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
