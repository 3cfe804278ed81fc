//! Market purchase service
//!
//! Ad-hoc purchases made outside the registered supplier flow; the item name
//! is free text and deliberately not linked to a supply record.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_date;

/// Market purchase service
#[derive(Clone)]
pub struct MarketPurchaseService {
    db: PgPool,
}

/// An ad-hoc market purchase
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MarketPurchase {
    #[serde(rename = "Purchase_ID")]
    pub purchase_id: i64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Item_Name")]
    pub item_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: Decimal,
    #[serde(rename = "Cost")]
    pub cost: Decimal,
    #[serde(rename = "Category")]
    pub category: Option<String>,
}

/// Input for recording a market purchase
#[derive(Debug, Default, Deserialize)]
pub struct CreatePurchaseInput {
    /// Purchase date as YYYY-MM-DD, defaults to today
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Item_Name")]
    pub item_name: Option<String>,
    /// Defaults to 1
    #[serde(rename = "Quantity")]
    pub quantity: Option<Decimal>,
    #[serde(rename = "Cost")]
    pub cost: Option<Decimal>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
}

impl MarketPurchaseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<MarketPurchase>> {
        let purchases = sqlx::query_as::<_, MarketPurchase>(
            r#"
            SELECT purchase_id, date, item_name, quantity, cost, category
            FROM market_purchases
            ORDER BY purchase_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(purchases)
    }

    pub async fn create(&self, input: CreatePurchaseInput) -> AppResult<MarketPurchase> {
        let item_name = input
            .item_name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Item_Name is required".to_string()))?;
        let cost = input
            .cost
            .ok_or_else(|| AppError::Validation("Cost is required".to_string()))?;

        let quantity = input.quantity.unwrap_or(Decimal::ONE);
        let date = match input.date.as_deref() {
            Some(raw) => parse_date("Date", raw)?,
            None => Utc::now().date_naive(),
        };

        let purchase = sqlx::query_as::<_, MarketPurchase>(
            r#"
            INSERT INTO market_purchases (date, item_name, quantity, cost, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING purchase_id, date, item_name, quantity, cost, category
            "#,
        )
        .bind(date)
        .bind(&item_name)
        .bind(quantity)
        .bind(cost)
        .bind(&input.category)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(purchase)
    }

    pub async fn delete(&self, purchase_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM market_purchases WHERE purchase_id = $1")
            .bind(purchase_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
