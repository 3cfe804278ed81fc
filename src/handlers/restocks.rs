//! HTTP handlers for restock requests

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::restocks::{CreateRestockInput, RestockRequest, RestockService};
use crate::AppState;

/// List all restock requests
pub async fn list_restocks(State(state): State<AppState>) -> AppResult<Json<Vec<RestockRequest>>> {
    let service = RestockService::new(state.db);
    Ok(Json(service.list().await?))
}

/// File a restock request
pub async fn create_restock(
    State(state): State<AppState>,
    Json(input): Json<CreateRestockInput>,
) -> AppResult<(StatusCode, Json<RestockRequest>)> {
    let service = RestockService::new(state.db);
    let request = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Delete a restock request
pub async fn delete_restock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = RestockService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
