//! HTTP handlers for usage records

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::usage::{CreateUsageInput, UsageRecord, UsageService};
use crate::AppState;

/// List all usage records
pub async fn list_usage(State(state): State<AppState>) -> AppResult<Json<Vec<UsageRecord>>> {
    let service = UsageService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Record usage of a supply
pub async fn create_usage(
    State(state): State<AppState>,
    Json(input): Json<CreateUsageInput>,
) -> AppResult<(StatusCode, Json<UsageRecord>)> {
    let service = UsageService::new(state.db);
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Delete a usage record
pub async fn delete_usage(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = UsageService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
