//! HTTP handlers for the supplier registry

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::suppliers::{CreateSupplierInput, Supplier, SupplierService};
use crate::AppState;

/// List all suppliers
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let service = SupplierService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Register a supplier
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(input): Json<CreateSupplierInput>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let service = SupplierService::new(state.db);
    let supplier = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Delete a supplier and its dependent orders
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = SupplierService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
