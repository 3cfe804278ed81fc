//! Expense ledger service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_date;

/// Expense ledger service
#[derive(Clone)]
pub struct ExpenseService {
    db: PgPool,
}

/// A recorded operating expense
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Expense {
    #[serde(rename = "Expense_ID")]
    pub expense_id: i64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}

/// Input for recording an expense
#[derive(Debug, Default, Deserialize)]
pub struct CreateExpenseInput {
    /// Expense date as YYYY-MM-DD, defaults to today
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<Decimal>,
}

impl ExpenseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT expense_id, date, category, amount FROM expenses ORDER BY expense_id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(expenses)
    }

    pub async fn create(&self, input: CreateExpenseInput) -> AppResult<Expense> {
        let amount = input
            .amount
            .ok_or_else(|| AppError::Validation("Amount is required".to_string()))?;

        let date = match input.date.as_deref() {
            Some(raw) => parse_date("Date", raw)?,
            None => Utc::now().date_naive(),
        };

        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (date, category, amount)
            VALUES ($1, $2, $3)
            RETURNING expense_id, date, category, amount
            "#,
        )
        .bind(date)
        .bind(&input.category)
        .bind(amount)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(expense)
    }

    pub async fn delete(&self, expense_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM expenses WHERE expense_id = $1")
            .bind(expense_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
