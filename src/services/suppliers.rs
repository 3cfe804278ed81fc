//! Supplier registry service

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::{AppError, AppResult};

/// Supplier registry service
#[derive(Clone)]
pub struct SupplierService {
    db: PgPool,
}

/// A registered supplier
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supplier {
    #[serde(rename = "Supplier_ID")]
    pub supplier_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Contact")]
    pub contact: Option<String>,
    /// Lead time in days
    #[serde(rename = "Lead_Time")]
    pub lead_time: Option<i32>,
}

/// Input for registering a supplier
#[derive(Debug, Default, Deserialize)]
pub struct CreateSupplierInput {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Contact")]
    pub contact: Option<String>,
    #[serde(rename = "Lead_Time")]
    pub lead_time: Option<i32>,
}

impl SupplierService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT supplier_id, name, contact, lead_time FROM suppliers ORDER BY supplier_id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(suppliers)
    }

    pub async fn create(&self, input: CreateSupplierInput) -> AppResult<Supplier> {
        let name = input
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

        let supplier = sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (name, contact, lead_time)
            VALUES ($1, $2, $3)
            RETURNING supplier_id, name, contact, lead_time
            "#,
        )
        .bind(&name)
        .bind(&input.contact)
        .bind(input.lead_time)
        .fetch_one(&self.db)
        .await
        .map_err(AppError::rejected_commit)?;

        Ok(supplier)
    }

    /// Delete a supplier. Orders referencing it are cascaded by the store.
    pub async fn delete(&self, supplier_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE supplier_id = $1")
            .bind(supplier_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
