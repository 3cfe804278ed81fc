//! HTTP handlers for the supply catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::supplies::{CreateSupplyInput, Supply, SupplyService};
use crate::AppState;

/// List all supplies
pub async fn list_supplies(State(state): State<AppState>) -> AppResult<Json<Vec<Supply>>> {
    let service = SupplyService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Get a single supply by id
pub async fn get_supply(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Supply>> {
    let service = SupplyService::new(state.db);
    Ok(Json(service.get(id).await?))
}

/// Register a supply
pub async fn create_supply(
    State(state): State<AppState>,
    Json(input): Json<CreateSupplyInput>,
) -> AppResult<(StatusCode, Json<Supply>)> {
    let service = SupplyService::new(state.db);
    let supply = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(supply)))
}

/// Delete a supply and its dependent rows
pub async fn delete_supply(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = SupplyService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
