//! Usage record service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_date;

/// Usage record service
#[derive(Clone)]
pub struct UsageService {
    db: PgPool,
}

/// A quantity of a supply consumed on a given date
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UsageRecord {
    #[serde(rename = "Usage_ID")]
    pub usage_id: i64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Supply_ID")]
    pub supply_id: i64,
    #[serde(rename = "Quantity_Used")]
    pub quantity_used: Decimal,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    /// Joined supply name; null if the supply row is gone
    #[serde(rename = "Supply_Name")]
    pub supply_name: Option<String>,
}

/// Input for recording usage
#[derive(Debug, Default, Deserialize)]
pub struct CreateUsageInput {
    /// Usage date as YYYY-MM-DD, defaults to today
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Supply_ID")]
    pub supply_id: Option<i64>,
    #[serde(rename = "Quantity_Used")]
    pub quantity_used: Option<Decimal>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
}

impl UsageService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<UsageRecord>> {
        let records = sqlx::query_as::<_, UsageRecord>(
            r#"
            SELECT u.usage_id, u.date, u.supply_id, u.quantity_used, u.location,
                   s.name AS supply_name
            FROM usage_records u
            LEFT JOIN supplies s ON s.supply_id = u.supply_id
            ORDER BY u.usage_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }

    pub async fn create(&self, input: CreateUsageInput) -> AppResult<UsageRecord> {
        let supply_id = input
            .supply_id
            .ok_or_else(|| AppError::Validation("Supply_ID is required".to_string()))?;
        let quantity_used = input
            .quantity_used
            .ok_or_else(|| AppError::Validation("Quantity_Used is required".to_string()))?;

        let date = match input.date.as_deref() {
            Some(raw) => parse_date("Date", raw)?,
            None => Utc::now().date_naive(),
        };

        let record = sqlx::query_as::<_, UsageRecord>(
            r#"
            INSERT INTO usage_records (date, supply_id, quantity_used, location)
            VALUES ($1, $2, $3, $4)
            RETURNING usage_id, date, supply_id, quantity_used, location,
                      (SELECT name FROM supplies
                       WHERE supplies.supply_id = usage_records.supply_id) AS supply_name
            "#,
        )
        .bind(date)
        .bind(supply_id)
        .bind(quantity_used)
        .bind(&input.location)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(record)
    }

    pub async fn delete(&self, usage_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM usage_records WHERE usage_id = $1")
            .bind(usage_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
