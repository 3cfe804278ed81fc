//! Reporting engine: derived views over the inventory tables
//!
//! Every report recomputes from a live snapshot of the relevant tables; the
//! computation itself is a pure function of the fetched rows and `today`, so
//! the arithmetic below never touches the database. Absent data defaults to
//! zero, an empty list, or a sentinel; nothing here divides by zero or fails
//! on a missing lookup.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::expenses::Expense;
use crate::services::orders::SupplyOrder;
use crate::services::purchases::MarketPurchase;
use crate::services::restocks::RestockRequest;
use crate::services::stock::StoreStock;
use crate::services::supplies::Supply;
use crate::services::usage::UsageRecord;
use crate::services::{
    ExpenseService, MarketPurchaseService, RestockService, StoreStockService, SupplyOrderService,
    SupplyService, UsageService,
};

/// Inclusive length of the rolling report window, in days.
const WINDOW_DAYS: i64 = 30;

/// Days of stock reported when there is no usage signal at all.
const NO_USAGE_SENTINEL: i64 = 999;

/// Days-remaining values at or above this are reported as "365+".
const DAYS_REMAINING_CAP: i64 = 365;

/// How many supplies the dashboard ranks by usage.
const TOP_SUPPLIES_LIMIT: usize = 5;

/// Category label for expenses recorded without one.
const UNCATEGORIZED: &str = "Uncategorized";

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    db: PgPool,
}

/// Priority bands for expiring supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpiryPriority {
    High,
    Medium,
    Low,
}

/// One supply expiring inside the 30-day window
#[derive(Debug, Clone, Serialize)]
pub struct ExpiringSupply {
    #[serde(flatten)]
    pub supply: Supply,
    pub days_until_expiry: i64,
    pub current_stock: Decimal,
    pub priority: ExpiryPriority,
}

/// Status buckets for stock alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertStatus {
    Critical,
    Warning,
    Low,
}

/// Estimated days of stock left: a number, or the ">= 365" cap.
///
/// Serialized as a plain integer or the literal string "365+".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysRemaining {
    Days(i64),
    Capped,
}

impl DaysRemaining {
    pub fn from_days(days: i64) -> Self {
        if days >= DAYS_REMAINING_CAP {
            DaysRemaining::Capped
        } else {
            DaysRemaining::Days(days)
        }
    }
}

impl Serialize for DaysRemaining {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DaysRemaining::Days(days) => serializer.serialize_i64(*days),
            DaysRemaining::Capped => serializer.serialize_str("365+"),
        }
    }
}

/// One alert row per low store-stock row
#[derive(Debug, Clone, Serialize)]
pub struct StockAlert {
    #[serde(rename = "Supply_ID")]
    pub supply_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Current_Stock")]
    pub current_stock: Decimal,
    #[serde(rename = "Daily_Usage")]
    pub daily_usage: Decimal,
    #[serde(rename = "Days_Remaining")]
    pub days_remaining: DaysRemaining,
    #[serde(rename = "Status")]
    pub status: AlertStatus,
}

/// One month of spending, sparse by category: an absent category means no
/// expenses that month, which is distinct from an explicit zero.
#[derive(Debug, Clone, Serialize)]
pub struct TrendRow {
    pub date: String,
    #[serde(flatten)]
    pub totals: BTreeMap<String, Decimal>,
}

/// Spending trend matrix plus the full category list
#[derive(Debug, Clone, Serialize)]
pub struct SpendingTrends {
    pub trends: Vec<TrendRow>,
    pub categories: Vec<String>,
}

/// In-window spend split between the supplier and market channels
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRatio {
    pub supply: Decimal,
    pub market: Decimal,
    pub supply_percentage: Decimal,
    pub market_percentage: Decimal,
}

/// One of the most-used supplies in the window
#[derive(Debug, Clone, Serialize)]
pub struct TopSupply {
    pub id: i64,
    pub name: String,
    pub quantity_used: Decimal,
}

/// Dashboard KPI aggregate
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub low_stock_count: i64,
    pub expiring_soon_count: i64,
    pub pending_restocks: i64,
    pub inventory_value: Decimal,
    pub monthly_expenses: Decimal,
    pub purchase_ratio: PurchaseRatio,
    pub top_supplies: Vec<TopSupply>,
    pub report_date: NaiveDate,
}

/// Full-table snapshot feeding the dashboard computation
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub supplies: Vec<Supply>,
    pub stock: Vec<StoreStock>,
    pub restocks: Vec<RestockRequest>,
    pub expenses: Vec<Expense>,
    pub orders: Vec<SupplyOrder>,
    pub purchases: Vec<MarketPurchase>,
    pub usage: Vec<UsageRecord>,
}

impl ReportingService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Supplies whose expiry date falls within the next 30 days.
    pub async fn expiring_soon(&self, today: NaiveDate) -> AppResult<Vec<ExpiringSupply>> {
        let supplies = SupplyService::new(self.db.clone()).list().await?;
        let stock = StoreStockService::new(self.db.clone()).list().await?;
        Ok(expiring_soon(&supplies, &stock, today))
    }

    /// Alerts for store-stock rows running low.
    pub async fn stock_alerts(&self, today: NaiveDate) -> AppResult<Vec<StockAlert>> {
        let stock = StoreStockService::new(self.db.clone()).list().await?;
        let supplies = SupplyService::new(self.db.clone()).list().await?;
        let usage = UsageService::new(self.db.clone()).list().await?;
        Ok(stock_alerts(&stock, &supplies, &usage, today))
    }

    /// Monthly spending grouped by expense category.
    pub async fn spending_trends(&self) -> AppResult<SpendingTrends> {
        let expenses = ExpenseService::new(self.db.clone()).list().await?;
        Ok(spending_trends(&expenses))
    }

    /// The dashboard KPI aggregate over the rolling 30-day window.
    pub async fn dashboard_summary(&self, today: NaiveDate) -> AppResult<DashboardSummary> {
        let snapshot = DashboardSnapshot {
            supplies: SupplyService::new(self.db.clone()).list().await?,
            stock: StoreStockService::new(self.db.clone()).list().await?,
            restocks: RestockService::new(self.db.clone()).list().await?,
            expenses: ExpenseService::new(self.db.clone()).list().await?,
            orders: SupplyOrderService::new(self.db.clone()).list().await?,
            purchases: MarketPurchaseService::new(self.db.clone()).list().await?,
            usage: UsageService::new(self.db.clone()).list().await?,
        };
        Ok(dashboard_summary(&snapshot, today))
    }
}

/// Priority as a function of days until expiry: under a week is High, under
/// two weeks Medium, anything further out Low.
pub fn expiry_priority(days_until_expiry: i64) -> ExpiryPriority {
    if days_until_expiry < 7 {
        ExpiryPriority::High
    } else if days_until_expiry < 14 {
        ExpiryPriority::Medium
    } else {
        ExpiryPriority::Low
    }
}

/// Status as a function of estimated days remaining.
pub fn alert_status(days_remaining: i64) -> AlertStatus {
    if days_remaining < 3 {
        AlertStatus::Critical
    } else if days_remaining < 7 {
        AlertStatus::Warning
    } else {
        AlertStatus::Low
    }
}

/// Filter supplies to those expiring in [today, today + 30] inclusive and
/// attach the store stock on hand. `stock` is expected in id order; the
/// first row per supply is authoritative when duplicates exist.
pub fn expiring_soon(
    supplies: &[Supply],
    stock: &[StoreStock],
    today: NaiveDate,
) -> Vec<ExpiringSupply> {
    let window_end = today + Duration::days(WINDOW_DAYS);

    supplies
        .iter()
        .filter_map(|supply| {
            let expiry = supply.expiry_date?;
            if expiry < today || expiry > window_end {
                return None;
            }
            let days_until_expiry = (expiry - today).num_days();
            let current_stock = stock
                .iter()
                .find(|row| row.supply_id == supply.supply_id)
                .map(|row| row.quantity_available)
                .unwrap_or(Decimal::ZERO);
            Some(ExpiringSupply {
                supply: supply.clone(),
                days_until_expiry,
                current_stock,
                priority: expiry_priority(days_until_expiry),
            })
        })
        .collect()
}

/// Emit one alert per store-stock row under the low threshold. A supply that
/// somehow has several stock rows yields several alerts. The supply lookup
/// may miss when a delete lands between the two snapshot reads; the alert
/// then carries placeholder name/category instead of being dropped.
pub fn stock_alerts(
    stock: &[StoreStock],
    supplies: &[Supply],
    usage: &[UsageRecord],
    today: NaiveDate,
) -> Vec<StockAlert> {
    let window_start = today - Duration::days(WINDOW_DAYS);

    stock
        .iter()
        .filter(|row| row.quantity_available < Decimal::TEN)
        .map(|row| {
            let supply = supplies.iter().find(|s| s.supply_id == row.supply_id);
            let usage_30d: Decimal = usage
                .iter()
                .filter(|u| {
                    u.supply_id == row.supply_id && u.date >= window_start && u.date <= today
                })
                .map(|u| u.quantity_used)
                .sum();

            // 0.1/day keeps the estimate finite when nothing was logged.
            let daily_usage = if usage_30d > Decimal::ZERO {
                usage_30d / Decimal::from(WINDOW_DAYS)
            } else {
                Decimal::new(1, 1)
            };
            let days_remaining = if daily_usage > Decimal::ZERO {
                (row.quantity_available / daily_usage)
                    .floor()
                    .to_i64()
                    .unwrap_or(NO_USAGE_SENTINEL)
            } else {
                NO_USAGE_SENTINEL
            };

            StockAlert {
                supply_id: row.supply_id,
                name: supply
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| format!("Supply {}", row.supply_id)),
                category: match supply {
                    Some(s) => s.category.clone(),
                    None => Some("Unknown".to_string()),
                },
                current_stock: row.quantity_available,
                daily_usage,
                days_remaining: DaysRemaining::from_days(days_remaining),
                status: alert_status(days_remaining),
            }
        })
        .collect()
}

/// Group expenses into a sparse (month, category) matrix. Rows come out
/// ascending by month; the category list is the full sorted set of names
/// seen, with null categories folded into "Uncategorized".
pub fn spending_trends(expenses: &[Expense]) -> SpendingTrends {
    let mut months: BTreeMap<String, BTreeMap<String, Decimal>> = BTreeMap::new();
    let mut categories: BTreeSet<String> = BTreeSet::new();

    for expense in expenses {
        let month = expense.date.format("%Y-%m").to_string();
        let category = expense
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        categories.insert(category.clone());
        *months
            .entry(month)
            .or_default()
            .entry(category)
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    SpendingTrends {
        trends: months
            .into_iter()
            .map(|(date, totals)| TrendRow { date, totals })
            .collect(),
        categories: categories.into_iter().collect(),
    }
}

/// Split the in-window purchase spend between the supplier and market
/// channels. With no spend at all, every sub-field is zero.
pub fn purchase_ratio(supply: Decimal, market: Decimal) -> PurchaseRatio {
    let total = supply + market;
    if total > Decimal::ZERO {
        PurchaseRatio {
            supply,
            market,
            supply_percentage: (supply / total * Decimal::ONE_HUNDRED).round_dp(2),
            market_percentage: (market / total * Decimal::ONE_HUNDRED).round_dp(2),
        }
    } else {
        PurchaseRatio {
            supply: Decimal::ZERO,
            market: Decimal::ZERO,
            supply_percentage: Decimal::ZERO,
            market_percentage: Decimal::ZERO,
        }
    }
}

/// Rank supplies by quantity used inside the window, descending, ties broken
/// by supply id. Usage pointing at a missing supply is skipped.
pub fn top_supplies(usage: &[UsageRecord], supplies: &[Supply], today: NaiveDate) -> Vec<TopSupply> {
    let window_start = today - Duration::days(WINDOW_DAYS);

    let mut totals: BTreeMap<i64, Decimal> = BTreeMap::new();
    for record in usage {
        if record.date >= window_start && record.date <= today {
            *totals.entry(record.supply_id).or_insert(Decimal::ZERO) += record.quantity_used;
        }
    }

    let mut ranked: Vec<TopSupply> = totals
        .into_iter()
        .filter_map(|(supply_id, quantity_used)| {
            let supply = supplies.iter().find(|s| s.supply_id == supply_id)?;
            Some(TopSupply {
                id: supply_id,
                name: supply.name.clone(),
                quantity_used,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.quantity_used.cmp(&a.quantity_used).then(a.id.cmp(&b.id)));
    ranked.truncate(TOP_SUPPLIES_LIMIT);
    ranked
}

/// Compute the seven dashboard metrics over one snapshot.
pub fn dashboard_summary(snapshot: &DashboardSnapshot, today: NaiveDate) -> DashboardSummary {
    let window_start = today - Duration::days(WINDOW_DAYS);
    let window_end = today + Duration::days(WINDOW_DAYS);

    let low_stock_count = snapshot
        .stock
        .iter()
        .filter(|row| row.quantity_available < Decimal::TEN)
        .count() as i64;

    let expiring_soon_count = snapshot
        .supplies
        .iter()
        .filter(|s| {
            s.expiry_date
                .map_or(false, |expiry| expiry >= today && expiry <= window_end)
        })
        .count() as i64;

    // Every request ever filed counts as pending; there is no status field.
    let pending_restocks = snapshot.restocks.len() as i64;

    let inventory_value: Decimal = snapshot
        .supplies
        .iter()
        .map(|s| s.total_quantity * s.cost_per_unit)
        .sum();

    let monthly_expenses: Decimal = snapshot
        .expenses
        .iter()
        .filter(|e| e.date >= window_start && e.date <= today)
        .map(|e| e.amount)
        .sum();

    let supply_spend: Decimal = snapshot
        .orders
        .iter()
        .filter(|o| o.date >= window_start && o.date <= today)
        .map(|o| o.total_cost)
        .sum();
    let market_spend: Decimal = snapshot
        .purchases
        .iter()
        .filter(|p| p.date >= window_start && p.date <= today)
        .map(|p| p.cost)
        .sum();

    DashboardSummary {
        low_stock_count,
        expiring_soon_count,
        pending_restocks,
        inventory_value,
        monthly_expenses,
        purchase_ratio: purchase_ratio(supply_spend, market_spend),
        top_supplies: top_supplies(&snapshot.usage, &snapshot.supplies, today),
        report_date: today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn supply(id: i64, name: &str, expiry: Option<NaiveDate>) -> Supply {
        Supply {
            supply_id: id,
            name: name.to_string(),
            category: Some("Tea".to_string()),
            expiry_date: expiry,
            total_quantity: dec("100"),
            cost_per_unit: dec("2"),
        }
    }

    fn stock_row(stock_id: i64, supply_id: i64, qty: &str) -> StoreStock {
        StoreStock {
            stock_id,
            supply_id,
            quantity_available: dec(qty),
            last_updated: d(2024, 1, 1).and_hms_opt(9, 0, 0).unwrap(),
            supply_name: None,
        }
    }

    fn usage_row(usage_id: i64, supply_id: i64, date: NaiveDate, qty: &str) -> UsageRecord {
        UsageRecord {
            usage_id,
            date,
            supply_id,
            quantity_used: dec(qty),
            location: None,
            supply_name: None,
        }
    }

    fn expense(id: i64, date: NaiveDate, category: Option<&str>, amount: &str) -> Expense {
        Expense {
            expense_id: id,
            date,
            category: category.map(|c| c.to_string()),
            amount: dec(amount),
        }
    }

    fn today() -> NaiveDate {
        d(2024, 6, 15)
    }

    // ------------------------------------------------------------------
    // Expiring-soon report
    // ------------------------------------------------------------------

    #[test]
    fn test_expiring_window_boundaries() {
        let today = today();
        let supplies = vec![
            supply(1, "expires today", Some(today)),
            supply(2, "expires at edge", Some(today + Duration::days(30))),
            supply(3, "expires past edge", Some(today + Duration::days(31))),
            supply(4, "already expired", Some(today - Duration::days(1))),
            supply(5, "no expiry", None),
        ];

        let report = expiring_soon(&supplies, &[], today);
        let ids: Vec<i64> = report.iter().map(|e| e.supply.supply_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(report[0].days_until_expiry, 0);
        assert_eq!(report[1].days_until_expiry, 30);
    }

    #[test]
    fn test_expiry_priority_thresholds() {
        assert_eq!(expiry_priority(0), ExpiryPriority::High);
        assert_eq!(expiry_priority(6), ExpiryPriority::High);
        assert_eq!(expiry_priority(7), ExpiryPriority::Medium);
        assert_eq!(expiry_priority(13), ExpiryPriority::Medium);
        assert_eq!(expiry_priority(14), ExpiryPriority::Low);
        assert_eq!(expiry_priority(30), ExpiryPriority::Low);
    }

    #[test]
    fn test_expiring_uses_first_stock_row() {
        let today = today();
        let supplies = vec![supply(1, "matcha", Some(today + Duration::days(5)))];
        let stock = vec![stock_row(10, 1, "4"), stock_row(11, 1, "40")];

        let report = expiring_soon(&supplies, &stock, today);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].current_stock, dec("4"));
        assert_eq!(report[0].priority, ExpiryPriority::High);
    }

    #[test]
    fn test_expiring_defaults_stock_to_zero() {
        let today = today();
        let supplies = vec![supply(1, "matcha", Some(today + Duration::days(20)))];

        let report = expiring_soon(&supplies, &[], today);
        assert_eq!(report[0].current_stock, Decimal::ZERO);
        assert_eq!(report[0].priority, ExpiryPriority::Low);
    }

    // ------------------------------------------------------------------
    // Stock alerts
    // ------------------------------------------------------------------

    #[test]
    fn test_alert_threshold_is_strict() {
        let today = today();
        let supplies = vec![supply(1, "boba", None), supply(2, "straws", None)];
        let stock = vec![stock_row(1, 1, "10"), stock_row(2, 2, "9.5")];

        let alerts = stock_alerts(&stock, &supplies, &[], today);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].supply_id, 2);
    }

    #[test]
    fn test_alert_no_usage_falls_back_to_epsilon() {
        // qty 9 with no usage: daily 0.1, 90 days remaining, Low.
        let today = today();
        let supplies = vec![supply(1, "boba", None)];
        let stock = vec![stock_row(1, 1, "9")];

        let alerts = stock_alerts(&stock, &supplies, &[], today);
        assert_eq!(alerts[0].daily_usage, dec("0.1"));
        assert_eq!(alerts[0].days_remaining, DaysRemaining::Days(90));
        assert_eq!(alerts[0].status, AlertStatus::Low);
    }

    #[test]
    fn test_alert_heavy_usage_is_critical() {
        // qty 2 with 60 used over the window: daily 2, 1 day remaining.
        let today = today();
        let supplies = vec![supply(1, "boba", None)];
        let stock = vec![stock_row(1, 1, "2")];
        let usage = vec![
            usage_row(1, 1, today - Duration::days(10), "40"),
            usage_row(2, 1, today, "20"),
        ];

        let alerts = stock_alerts(&stock, &supplies, &usage, today);
        assert_eq!(alerts[0].daily_usage, dec("2"));
        assert_eq!(alerts[0].days_remaining, DaysRemaining::Days(1));
        assert_eq!(alerts[0].status, AlertStatus::Critical);
    }

    #[test]
    fn test_alert_warning_band() {
        // daily 1 over qty 5: 5 days remaining -> Warning.
        let today = today();
        let supplies = vec![supply(1, "boba", None)];
        let stock = vec![stock_row(1, 1, "5")];
        let usage = vec![usage_row(1, 1, today - Duration::days(3), "30")];

        let alerts = stock_alerts(&stock, &supplies, &usage, today);
        assert_eq!(alerts[0].days_remaining, DaysRemaining::Days(5));
        assert_eq!(alerts[0].status, AlertStatus::Warning);
    }

    #[test]
    fn test_alert_caps_at_365_plus() {
        // qty 9.9 with no usage stays under the cap: 9.9/0.1 = 99 days.
        let today = today();
        let supplies = vec![supply(1, "boba", None)];
        let stock = vec![stock_row(1, 1, "9.9")];
        let alerts = stock_alerts(&stock, &supplies, &[], today);
        assert_eq!(alerts[0].days_remaining, DaysRemaining::Days(99));

        // A trickle of real usage: daily 0.01, 990 days, reported as "365+".
        let usage = vec![usage_row(1, 1, today, "0.3")];
        let alerts = stock_alerts(&stock, &supplies, &usage, today);
        assert_eq!(alerts[0].days_remaining, DaysRemaining::Capped);
        assert_eq!(alerts[0].status, AlertStatus::Low);
        assert_eq!(
            serde_json::to_value(alerts[0].days_remaining).unwrap(),
            serde_json::json!("365+")
        );
    }

    #[test]
    fn test_alert_usage_outside_window_ignored() {
        let today = today();
        let supplies = vec![supply(1, "boba", None)];
        let stock = vec![stock_row(1, 1, "6")];
        let usage = vec![
            usage_row(1, 1, today - Duration::days(31), "300"),
            usage_row(2, 1, today + Duration::days(1), "300"),
        ];

        let alerts = stock_alerts(&stock, &supplies, &usage, today);
        // Nothing inside the window, so the epsilon applies.
        assert_eq!(alerts[0].daily_usage, dec("0.1"));
        assert_eq!(alerts[0].days_remaining, DaysRemaining::Days(60));
    }

    #[test]
    fn test_alert_missing_supply_placeholders() {
        let today = today();
        let stock = vec![stock_row(1, 42, "3")];

        let alerts = stock_alerts(&stock, &[], &[], today);
        assert_eq!(alerts[0].name, "Supply 42");
        assert_eq!(alerts[0].category.as_deref(), Some("Unknown"));
    }

    #[test]
    fn test_alert_per_stock_row_not_per_supply() {
        let today = today();
        let supplies = vec![supply(1, "boba", None)];
        let stock = vec![stock_row(1, 1, "2"), stock_row(2, 1, "4")];

        let alerts = stock_alerts(&stock, &supplies, &[], today);
        assert_eq!(alerts.len(), 2);
    }

    // ------------------------------------------------------------------
    // Spending trends
    // ------------------------------------------------------------------

    #[test]
    fn test_trends_collapse_same_month_category() {
        let expenses = vec![
            expense(1, d(2024, 1, 5), Some("Food"), "10"),
            expense(2, d(2024, 1, 20), Some("Food"), "15"),
        ];

        let trends = spending_trends(&expenses);
        assert_eq!(trends.trends.len(), 1);
        assert_eq!(trends.trends[0].date, "2024-01");
        assert_eq!(trends.trends[0].totals["Food"], dec("25"));
        assert_eq!(trends.categories, vec!["Food"]);
    }

    #[test]
    fn test_trends_sparse_rows_and_month_order() {
        let expenses = vec![
            expense(1, d(2024, 2, 1), Some("Rent"), "900"),
            expense(2, d(2024, 1, 10), Some("Food"), "10"),
            expense(3, d(2024, 2, 12), Some("Food"), "20"),
        ];

        let trends = spending_trends(&expenses);
        let dates: Vec<&str> = trends.trends.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01", "2024-02"]);

        // January has no Rent entry at all, not a zero.
        assert!(!trends.trends[0].totals.contains_key("Rent"));
        assert_eq!(trends.trends[1].totals["Rent"], dec("900"));
        assert_eq!(trends.categories, vec!["Food", "Rent"]);
    }

    #[test]
    fn test_trends_null_category_is_uncategorized() {
        let expenses = vec![
            expense(1, d(2024, 3, 2), None, "5"),
            expense(2, d(2024, 3, 9), None, "7"),
        ];

        let trends = spending_trends(&expenses);
        assert_eq!(trends.trends[0].totals["Uncategorized"], dec("12"));
        assert_eq!(trends.categories, vec!["Uncategorized"]);
    }

    #[test]
    fn test_trends_empty_input() {
        let trends = spending_trends(&[]);
        assert!(trends.trends.is_empty());
        assert!(trends.categories.is_empty());
    }

    #[test]
    fn test_trend_row_serializes_flat() {
        let expenses = vec![expense(1, d(2024, 1, 5), Some("Food"), "25")];
        let trends = spending_trends(&expenses);
        let value = serde_json::to_value(&trends.trends[0]).unwrap();
        assert_eq!(value["date"], "2024-01");
        assert_eq!(value["Food"], serde_json::json!(25.0));
    }

    // ------------------------------------------------------------------
    // Dashboard summary
    // ------------------------------------------------------------------

    #[test]
    fn test_purchase_ratio_zero_spend() {
        let ratio = purchase_ratio(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(ratio.supply, Decimal::ZERO);
        assert_eq!(ratio.market, Decimal::ZERO);
        assert_eq!(ratio.supply_percentage, Decimal::ZERO);
        assert_eq!(ratio.market_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_purchase_ratio_percentages() {
        let ratio = purchase_ratio(dec("75"), dec("25"));
        assert_eq!(ratio.supply_percentage, dec("75.00"));
        assert_eq!(ratio.market_percentage, dec("25.00"));

        let ratio = purchase_ratio(dec("1"), dec("2"));
        assert_eq!(ratio.supply_percentage, dec("33.33"));
        assert_eq!(ratio.market_percentage, dec("66.67"));
    }

    #[test]
    fn test_top_supplies_ranking_and_limit() {
        let today = today();
        let supplies: Vec<Supply> = (1..=7).map(|i| supply(i, &format!("s{i}"), None)).collect();
        let mut usage = Vec::new();
        for (usage_id, supply_id, qty) in [(1, 1, "10"), (2, 2, "50"), (3, 3, "30"), (4, 4, "50")] {
            usage.push(usage_row(usage_id, supply_id, today - Duration::days(1), qty));
        }
        usage.push(usage_row(10, 5, today, "5"));
        usage.push(usage_row(11, 6, today, "6"));
        usage.push(usage_row(12, 7, today, "7"));

        let top = top_supplies(&usage, &supplies, today);
        assert_eq!(top.len(), 5);
        // 2 and 4 tie at 50; the lower id wins the tie.
        let ids: Vec<i64> = top.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1, 7]);
        assert_eq!(top[0].quantity_used, dec("50"));
    }

    #[test]
    fn test_top_supplies_skips_missing_supply() {
        let today = today();
        let usage = vec![usage_row(1, 99, today, "100")];
        let top = top_supplies(&usage, &[], today);
        assert!(top.is_empty());
    }

    #[test]
    fn test_dashboard_counts_and_sums() {
        let today = today();
        let snapshot = DashboardSnapshot {
            supplies: vec![
                supply(1, "boba", Some(today + Duration::days(10))),
                supply(2, "cups", Some(today + Duration::days(40))),
                supply(3, "straws", None),
            ],
            stock: vec![stock_row(1, 1, "3"), stock_row(2, 2, "50")],
            restocks: vec![
                RestockRequest {
                    request_id: 1,
                    date: today,
                    supply_id: 1,
                    quantity_requested: dec("10"),
                    request_type: "Transfer from Inventory".to_string(),
                    supply_name: None,
                },
                RestockRequest {
                    request_id: 2,
                    date: today - Duration::days(300),
                    supply_id: 2,
                    quantity_requested: dec("4"),
                    request_type: "Purchase from Supplier".to_string(),
                    supply_name: None,
                },
            ],
            expenses: vec![
                expense(1, today - Duration::days(5), Some("Food"), "100"),
                expense(2, today - Duration::days(31), Some("Food"), "999"),
            ],
            orders: vec![SupplyOrder {
                order_id: 1,
                date: today - Duration::days(2),
                supplier_id: 1,
                supply_id: 1,
                quantity_received: dec("20"),
                total_cost: dec("60"),
                supplier_name: None,
                supply_name: None,
            }],
            purchases: vec![MarketPurchase {
                purchase_id: 1,
                date: today,
                item_name: "lemons".to_string(),
                quantity: dec("3"),
                cost: dec("20"),
                category: None,
            }],
            usage: vec![usage_row(1, 1, today, "12")],
        };

        let summary = dashboard_summary(&snapshot, today);
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.expiring_soon_count, 1);
        assert_eq!(summary.pending_restocks, 2);
        // Three supplies at 100 * 2 each.
        assert_eq!(summary.inventory_value, dec("600"));
        assert_eq!(summary.monthly_expenses, dec("100"));
        assert_eq!(summary.purchase_ratio.supply, dec("60"));
        assert_eq!(summary.purchase_ratio.market, dec("20"));
        assert_eq!(summary.purchase_ratio.supply_percentage, dec("75.00"));
        assert_eq!(summary.top_supplies.len(), 1);
        assert_eq!(summary.top_supplies[0].name, "boba");
        assert_eq!(summary.report_date, today);
    }

    #[test]
    fn test_dashboard_empty_snapshot() {
        let summary = dashboard_summary(&DashboardSnapshot::default(), today());
        assert_eq!(summary.low_stock_count, 0);
        assert_eq!(summary.expiring_soon_count, 0);
        assert_eq!(summary.pending_restocks, 0);
        assert_eq!(summary.inventory_value, Decimal::ZERO);
        assert_eq!(summary.monthly_expenses, Decimal::ZERO);
        assert_eq!(summary.purchase_ratio.supply_percentage, Decimal::ZERO);
        assert!(summary.top_supplies.is_empty());
    }
}
