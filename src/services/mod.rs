//! Data access services for the Greatea inventory backend

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{AppError, AppResult};

pub mod expenses;
pub mod orders;
pub mod purchases;
pub mod reporting;
pub mod restocks;
pub mod stock;
pub mod suppliers;
pub mod supplies;
pub mod usage;

pub use expenses::ExpenseService;
pub use orders::SupplyOrderService;
pub use purchases::MarketPurchaseService;
pub use reporting::ReportingService;
pub use restocks::RestockService;
pub use stock::StoreStockService;
pub use suppliers::SupplierService;
pub use supplies::SupplyService;
pub use usage::UsageService;

/// Parse a `YYYY-MM-DD` date from a request body.
pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{field} must be a YYYY-MM-DD date")))
}

/// Parse a `YYYY-MM-DDTHH:MM` timestamp from a request body.
pub(crate) fn parse_datetime(field: &str, value: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").map_err(|_| {
        AppError::Validation(format!("{field} must be a YYYY-MM-DDTHH:MM timestamp"))
    })
}
