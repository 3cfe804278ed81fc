//! Store stock service
//!
//! Store stock is the quantity of a supply available at the point-of-sale
//! location, distinct from the central inventory quantity on the supply row.

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_datetime;

/// Store stock service
#[derive(Clone)]
pub struct StoreStockService {
    db: PgPool,
}

/// Stock level of a supply at the store
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoreStock {
    #[serde(rename = "Stock_ID")]
    pub stock_id: i64,
    #[serde(rename = "Supply_ID")]
    pub supply_id: i64,
    #[serde(rename = "Quantity_Available")]
    pub quantity_available: Decimal,
    #[serde(rename = "Last_Updated")]
    pub last_updated: NaiveDateTime,
    /// Joined supply name; null if the supply row is gone
    #[serde(rename = "Supply_Name")]
    pub supply_name: Option<String>,
}

/// Input for recording a stock level
#[derive(Debug, Default, Deserialize)]
pub struct CreateStockInput {
    #[serde(rename = "Supply_ID")]
    pub supply_id: Option<i64>,
    #[serde(rename = "Quantity_Available")]
    pub quantity_available: Option<Decimal>,
    /// Timestamp as YYYY-MM-DDTHH:MM, defaults to now
    #[serde(rename = "Last_Updated")]
    pub last_updated: Option<String>,
}

impl StoreStockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<StoreStock>> {
        let stock = sqlx::query_as::<_, StoreStock>(
            r#"
            SELECT st.stock_id, st.supply_id, st.quantity_available, st.last_updated,
                   s.name AS supply_name
            FROM store_stock st
            LEFT JOIN supplies s ON s.supply_id = st.supply_id
            ORDER BY st.stock_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(stock)
    }

    pub async fn create(&self, input: CreateStockInput) -> AppResult<StoreStock> {
        let supply_id = input
            .supply_id
            .ok_or_else(|| AppError::Validation("Supply_ID is required".to_string()))?;
        let quantity_available = input
            .quantity_available
            .ok_or_else(|| AppError::Validation("Quantity_Available is required".to_string()))?;

        let last_updated = match input.last_updated.as_deref() {
            Some(raw) => parse_datetime("Last_Updated", raw)?,
            None => Utc::now().naive_utc(),
        };

        let stock = sqlx::query_as::<_, StoreStock>(
            r#"
            INSERT INTO store_stock (supply_id, quantity_available, last_updated)
            VALUES ($1, $2, $3)
            RETURNING stock_id, supply_id, quantity_available, last_updated,
                      (SELECT name FROM supplies
                       WHERE supplies.supply_id = store_stock.supply_id) AS supply_name
            "#,
        )
        .bind(supply_id)
        .bind(quantity_available)
        .bind(last_updated)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(stock)
    }

    pub async fn delete(&self, stock_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM store_stock WHERE stock_id = $1")
            .bind(stock_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
