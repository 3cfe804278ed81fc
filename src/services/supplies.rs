//! Supply catalog service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_date;

/// Supply catalog service
#[derive(Clone)]
pub struct SupplyService {
    db: PgPool,
}

/// A trackable inventory item type held in central inventory
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supply {
    #[serde(rename = "Supply_ID")]
    pub supply_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Expiry_Date")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(rename = "Total_Quantity")]
    pub total_quantity: Decimal,
    #[serde(rename = "Cost_Per_Unit")]
    pub cost_per_unit: Decimal,
}

/// Input for registering a supply
#[derive(Debug, Default, Deserialize)]
pub struct CreateSupplyInput {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    /// Expiry date as YYYY-MM-DD
    #[serde(rename = "Expiry_Date")]
    pub expiry_date: Option<String>,
    #[serde(rename = "Total_Quantity")]
    pub total_quantity: Option<Decimal>,
    #[serde(rename = "Cost_Per_Unit")]
    pub cost_per_unit: Option<Decimal>,
}

impl SupplyService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Supply>> {
        let supplies = sqlx::query_as::<_, Supply>(
            r#"
            SELECT supply_id, name, category, expiry_date, total_quantity, cost_per_unit
            FROM supplies
            ORDER BY supply_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(supplies)
    }

    pub async fn get(&self, supply_id: i64) -> AppResult<Supply> {
        sqlx::query_as::<_, Supply>(
            r#"
            SELECT supply_id, name, category, expiry_date, total_quantity, cost_per_unit
            FROM supplies
            WHERE supply_id = $1
            "#,
        )
        .bind(supply_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, input: CreateSupplyInput) -> AppResult<Supply> {
        let name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

        let expiry_date = input
            .expiry_date
            .as_deref()
            .map(|raw| parse_date("Expiry_Date", raw))
            .transpose()?;

        let total_quantity = input.total_quantity.unwrap_or(Decimal::ZERO);
        let cost_per_unit = input.cost_per_unit.unwrap_or(Decimal::ZERO);

        if total_quantity < Decimal::ZERO {
            return Err(AppError::Validation(
                "Total_Quantity cannot be negative".to_string(),
            ));
        }
        if cost_per_unit < Decimal::ZERO {
            return Err(AppError::Validation(
                "Cost_Per_Unit cannot be negative".to_string(),
            ));
        }

        let supply = sqlx::query_as::<_, Supply>(
            r#"
            INSERT INTO supplies (name, category, expiry_date, total_quantity, cost_per_unit)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING supply_id, name, category, expiry_date, total_quantity, cost_per_unit
            "#,
        )
        .bind(&name)
        .bind(&input.category)
        .bind(expiry_date)
        .bind(total_quantity)
        .bind(cost_per_unit)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(supply)
    }

    /// Delete a supply. The store cascades the delete to dependent usage
    /// records, orders, stock rows, and restock requests.
    pub async fn delete(&self, supply_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM supplies WHERE supply_id = $1")
            .bind(supply_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
