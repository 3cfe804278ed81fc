//! Restock request service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

use super::parse_date;

/// Restock request service
#[derive(Clone)]
pub struct RestockService {
    db: PgPool,
}

/// Restock fulfillment channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    TransferFromInventory,
    PurchaseFromSupplier,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::TransferFromInventory => "Transfer from Inventory",
            RequestType::PurchaseFromSupplier => "Purchase from Supplier",
        }
    }

    /// Parse one of the two canonical request-type strings.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Transfer from Inventory" => Some(RequestType::TransferFromInventory),
            "Purchase from Supplier" => Some(RequestType::PurchaseFromSupplier),
            _ => None,
        }
    }
}

/// A recorded intent to replenish a supply's store stock
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RestockRequest {
    #[serde(rename = "Request_ID")]
    pub request_id: i64,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Supply_ID")]
    pub supply_id: i64,
    #[serde(rename = "Quantity_Requested")]
    pub quantity_requested: Decimal,
    #[serde(rename = "Request_Type")]
    pub request_type: String,
    /// Joined supply name; null if the supply row is gone
    #[serde(rename = "Supply_Name")]
    pub supply_name: Option<String>,
}

/// Input for filing a restock request
#[derive(Debug, Default, Deserialize)]
pub struct CreateRestockInput {
    /// Request date as YYYY-MM-DD, defaults to today
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Supply_ID")]
    pub supply_id: Option<i64>,
    #[serde(rename = "Quantity_Requested")]
    pub quantity_requested: Option<Decimal>,
    /// One of "Transfer from Inventory" / "Purchase from Supplier",
    /// defaults to the transfer channel
    #[serde(rename = "Request_Type")]
    pub request_type: Option<String>,
}

impl RestockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<RestockRequest>> {
        let requests = sqlx::query_as::<_, RestockRequest>(
            r#"
            SELECT r.request_id, r.date, r.supply_id, r.quantity_requested, r.request_type,
                   s.name AS supply_name
            FROM restock_requests r
            LEFT JOIN supplies s ON s.supply_id = r.supply_id
            ORDER BY r.request_id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(requests)
    }

    pub async fn create(&self, input: CreateRestockInput) -> AppResult<RestockRequest> {
        let supply_id = input
            .supply_id
            .ok_or_else(|| AppError::Validation("Supply_ID is required".to_string()))?;
        let quantity_requested = input
            .quantity_requested
            .ok_or_else(|| AppError::Validation("Quantity_Requested is required".to_string()))?;

        let request_type = match input.request_type.as_deref() {
            Some(raw) => RequestType::parse(raw).ok_or_else(|| {
                AppError::Validation(
                    "Request_Type must be 'Transfer from Inventory' or 'Purchase from Supplier'"
                        .to_string(),
                )
            })?,
            None => RequestType::TransferFromInventory,
        };

        let date = match input.date.as_deref() {
            Some(raw) => parse_date("Date", raw)?,
            None => Utc::now().date_naive(),
        };

        let request = sqlx::query_as::<_, RestockRequest>(
            r#"
            INSERT INTO restock_requests (date, supply_id, quantity_requested, request_type)
            VALUES ($1, $2, $3, $4)
            RETURNING request_id, date, supply_id, quantity_requested, request_type,
                      (SELECT name FROM supplies
                       WHERE supplies.supply_id = restock_requests.supply_id) AS supply_name
            "#,
        )
        .bind(date)
        .bind(supply_id)
        .bind(quantity_requested)
        .bind(request_type.as_str())
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(request)
    }

    pub async fn delete(&self, request_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM restock_requests WHERE request_id = $1")
            .bind(request_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_round_trip() {
        for kind in [
            RequestType::TransferFromInventory,
            RequestType::PurchaseFromSupplier,
        ] {
            assert_eq!(RequestType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_request_type_rejects_unknown() {
        assert_eq!(RequestType::parse("Borrow from Neighbor"), None);
        assert_eq!(RequestType::parse("transfer from inventory"), None);
        assert_eq!(RequestType::parse(""), None);
    }
}
