//! Supply order service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_date;

/// Supply order service
#[derive(Clone)]
pub struct SupplyOrderService {
    db: PgPool,
}

/// A delivery received from a registered supplier
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SupplyOrder {
    #[serde(rename = "Order_ID")]
    pub order_id: i64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Supplier_ID")]
    pub supplier_id: i64,
    #[serde(rename = "Supply_ID")]
    pub supply_id: i64,
    #[serde(rename = "Quantity_Received")]
    pub quantity_received: Decimal,
    #[serde(rename = "Total_Cost")]
    pub total_cost: Decimal,
    /// Joined supplier name; null if the supplier row is gone
    #[serde(rename = "Supplier_Name")]
    pub supplier_name: Option<String>,
    /// Joined supply name; null if the supply row is gone
    #[serde(rename = "Supply_Name")]
    pub supply_name: Option<String>,
}

/// Input for recording a supply order
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderInput {
    /// Order date as YYYY-MM-DD, defaults to today
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Supplier_ID")]
    pub supplier_id: Option<i64>,
    #[serde(rename = "Supply_ID")]
    pub supply_id: Option<i64>,
    #[serde(rename = "Quantity_Received")]
    pub quantity_received: Option<Decimal>,
    #[serde(rename = "Total_Cost")]
    pub total_cost: Option<Decimal>,
}

impl SupplyOrderService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<SupplyOrder>> {
        let orders = sqlx::query_as::<_, SupplyOrder>(
            r#"
            SELECT o.order_id, o.date, o.supplier_id, o.supply_id,
                   o.quantity_received, o.total_cost,
                   sup.name AS supplier_name, s.name AS supply_name
            FROM supply_orders o
            LEFT JOIN suppliers sup ON sup.supplier_id = o.supplier_id
            LEFT JOIN supplies s ON s.supply_id = o.supply_id
            ORDER BY o.order_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(orders)
    }

    pub async fn create(&self, input: CreateOrderInput) -> AppResult<SupplyOrder> {
        let supplier_id = input
            .supplier_id
            .ok_or_else(|| AppError::Validation("Supplier_ID is required".to_string()))?;
        let supply_id = input
            .supply_id
            .ok_or_else(|| AppError::Validation("Supply_ID is required".to_string()))?;
        let quantity_received = input
            .quantity_received
            .ok_or_else(|| AppError::Validation("Quantity_Received is required".to_string()))?;
        let total_cost = input
            .total_cost
            .ok_or_else(|| AppError::Validation("Total_Cost is required".to_string()))?;

        let date = match input.date.as_deref() {
            Some(raw) => parse_date("Date", raw)?,
            None => Utc::now().date_naive(),
        };

        let order = sqlx::query_as::<_, SupplyOrder>(
            r#"
            INSERT INTO supply_orders (date, supplier_id, supply_id, quantity_received, total_cost)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING order_id, date, supplier_id, supply_id, quantity_received, total_cost,
                      (SELECT name FROM suppliers
                       WHERE suppliers.supplier_id = supply_orders.supplier_id) AS supplier_name,
                      (SELECT name FROM supplies
                       WHERE supplies.supply_id = supply_orders.supply_id) AS supply_name
            "#,
        )
        .bind(date)
        .bind(supplier_id)
        .bind(supply_id)
        .bind(quantity_received)
        .bind(total_cost)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(order)
    }

    pub async fn delete(&self, order_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM supply_orders WHERE order_id = $1")
            .bind(order_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
