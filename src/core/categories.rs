//! Category Distribution Calculator.
//!
//! Breaks an arbitrary date range down by category, with each row's share
//! expressed as a percentage of its own flow's total (income rows against
//! total income, expense rows against total expense - never against the
//! grand total of both flows). Two port queries: flow totals first for the
//! denominators, then the per-category breakdown. The result bundles the
//! range totals so callers never need a second round trip.

use crate::{
    core::round2,
    entities::Flow,
    errors::Result,
    ledger,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// One category's slice of the range.
///
/// The category fields are `None` for uncategorized transactions, which form
/// a group of their own instead of being dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummaryItem {
    /// Category id, `None` for uncategorized transactions
    pub category_id: Option<i64>,
    /// Category display name
    pub category_name: Option<String>,
    /// Category display icon
    pub category_icon: Option<String>,
    /// Category display color
    pub category_color: Option<String>,
    /// Income or expense
    pub flow: Flow,
    /// Summed amount in cents
    pub total_cents: i64,
    /// Number of transactions in the group
    pub transaction_count: i64,
    /// Share of this flow's range total, 0-100, rounded to 2 decimals.
    /// Exactly 0 when the flow's total is 0.
    pub percentage: f64,
}

/// Per-category breakdown plus flow-level totals for the same range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Start of the queried range (inclusive)
    pub start: DateTime<Utc>,
    /// End of the queried range (inclusive)
    pub end: DateTime<Utc>,
    /// Total income in range, in cents
    pub total_income_cents: i64,
    /// Total expense in range, in cents
    pub total_expense_cents: i64,
    /// Per-category rows, largest total first
    pub categories: Vec<CategorySummaryItem>,
}

/// Computes the category distribution of one user's transactions in
/// `[start, end]`, optionally restricted to a single flow.
///
/// Rows come back ordered by total descending; that ordering is part of the
/// calling contract.
///
/// # Errors
/// Propagates storage failures from the Ledger Query Port unchanged.
pub async fn category_summary(
    db: &DatabaseConnection,
    user_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    flow: Option<Flow>,
) -> Result<CategorySummary> {
    let flow_totals = ledger::sum_by_flow(db, user_id, start, end).await?;
    let total_for = |wanted: Flow| {
        flow_totals
            .iter()
            .find(|row| row.flow == wanted)
            .map_or(0, |row| row.total_cents)
    };
    let total_income_cents = total_for(Flow::Income);
    let total_expense_cents = total_for(Flow::Expense);

    let rows = ledger::sum_by_category_and_flow(db, user_id, start, end, flow).await?;

    let categories = rows
        .into_iter()
        .map(|row| {
            let denominator = match row.flow {
                Flow::Income => total_income_cents,
                Flow::Expense => total_expense_cents,
            };
            let percentage = if denominator > 0 {
                round2(row.total_cents as f64 / denominator as f64 * 100.0)
            } else {
                0.0
            };

            CategorySummaryItem {
                category_id: row.category_id,
                category_name: row.category_name,
                category_icon: row.category_icon,
                category_color: row.category_color,
                flow: row.flow,
                total_cents: row.total_cents,
                transaction_count: row.count,
                percentage,
            }
        })
        .collect();

    Ok(CategorySummary {
        start,
        end,
        total_income_cents,
        total_expense_cents,
        categories,
    })
}
