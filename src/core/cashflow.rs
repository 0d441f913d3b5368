//! Cash-Flow Window Builder.
//!
//! Produces a dense run of N trailing calendar months ending at a supplied
//! reference instant, with per-month income, expense, and balance plus
//! window-wide totals. The window is pre-seeded with a zero item for every
//! month before any ledger data is folded in, so consumers always see
//! exactly N gap-free entries no matter how sparse the ledger is.
//!
//! The reference instant is an explicit parameter rather than a hidden
//! `Utc::now()` so the window is reproducible in tests; the binary supplies
//! the real clock at its boundary.

use crate::{
    core::period::{WindowSize, YearMonth},
    entities::Flow,
    errors::Result,
    ledger,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::BTreeMap;

/// One month of the window. Present even when the month had no activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowItem {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Income in cents
    pub income_cents: i64,
    /// Expense in cents
    pub expense_cents: i64,
    /// `income_cents - expense_cents`
    pub balance_cents: i64,
}

/// Element-wise sums across the whole window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CashFlowTotals {
    /// Total income in cents
    pub income_cents: i64,
    /// Total expense in cents
    pub expense_cents: i64,
    /// Total balance in cents
    pub balance_cents: i64,
}

/// A dense trailing window of monthly cash flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowSummary {
    /// Window length in months
    pub months: u32,
    /// Exactly `months` items, chronologically ordered, no gaps
    pub data: Vec<CashFlowItem>,
    /// Element-wise sums over `data`
    pub totals: CashFlowTotals,
}

/// Builds the cash-flow window for the `window.get()` months ending at the
/// month containing `reference`.
///
/// # Errors
/// Propagates storage failures from the Ledger Query Port unchanged.
pub async fn cash_flow(
    db: &DatabaseConnection,
    user_id: i64,
    window: WindowSize,
    reference: DateTime<Utc>,
) -> Result<CashFlowSummary> {
    let last = YearMonth::containing(&reference);
    let first = last.minus_months(window.get() - 1);

    // Seed every month of the window with zeros; sparse ledger rows are
    // folded on top. (year, month) keys iterate chronologically.
    let mut buckets: BTreeMap<(i32, u32), CashFlowItem> = BTreeMap::new();
    let mut period = first;
    for _ in 0..window.get() {
        buckets.insert(
            (period.year(), period.month()),
            CashFlowItem {
                year: period.year(),
                month: period.month(),
                income_cents: 0,
                expense_cents: 0,
                balance_cents: 0,
            },
        );
        period = period.next();
    }

    let rows =
        ledger::sum_by_year_month_flow(db, user_id, first.first_instant(), reference).await?;
    for row in rows {
        if let Some(item) = buckets.get_mut(&(row.year, row.month)) {
            match row.flow {
                Flow::Income => item.income_cents = row.total_cents,
                Flow::Expense => item.expense_cents = row.total_cents,
            }
            item.balance_cents = item.income_cents - item.expense_cents;
        }
    }

    let data: Vec<CashFlowItem> = buckets.into_values().collect();
    let totals = data
        .iter()
        .fold(CashFlowTotals::default(), |acc, item| CashFlowTotals {
            income_cents: acc.income_cents + item.income_cents,
            expense_cents: acc.expense_cents + item.expense_cents,
            balance_cents: acc.balance_cents + item.balance_cents,
        });

    Ok(CashFlowSummary {
        months: window.get(),
        data,
        totals,
    })
}
