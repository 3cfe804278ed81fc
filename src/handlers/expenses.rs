//! HTTP handlers for the expense ledger

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::expenses::{CreateExpenseInput, Expense, ExpenseService};
use crate::AppState;

/// List all expenses
pub async fn list_expenses(State(state): State<AppState>) -> AppResult<Json<Vec<Expense>>> {
    let service = ExpenseService::new(state.db);
    Ok(Json(service.list().await?))
}

/// Record an expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(input): Json<CreateExpenseInput>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    let service = ExpenseService::new(state.db);
    let expense = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Delete an expense
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let service = ExpenseService::new(state.db);
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
