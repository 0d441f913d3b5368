//! Monthly Summary Calculator.
//!
//! Produces income, expense, balance, and transaction count for exactly one
//! calendar month. The month range is inclusive on both ends: from midnight
//! on the 1st to one millisecond before the next month begins. Flows with no
//! transactions contribute zero, so the summary is defined for every valid
//! month, including completely empty ones.

use crate::{core::period::YearMonth, entities::Flow, errors::Result, ledger};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// Derived totals for one calendar month. Recomputed on every request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
    /// Sum of income transactions, in cents
    pub total_income_cents: i64,
    /// Sum of expense transactions, in cents
    pub total_expense_cents: i64,
    /// `total_income_cents - total_expense_cents`
    pub balance_cents: i64,
    /// Number of transactions in the month, both flows
    pub transaction_count: i64,
}

/// Computes the summary for one user's transactions in one calendar month.
///
/// # Errors
/// Propagates storage failures from the Ledger Query Port unchanged.
pub async fn monthly_summary(
    db: &DatabaseConnection,
    user_id: i64,
    period: YearMonth,
) -> Result<MonthlySummary> {
    let rows = ledger::sum_by_flow(
        db,
        user_id,
        period.first_instant(),
        period.last_instant(),
    )
    .await?;

    let mut total_income_cents = 0;
    let mut total_expense_cents = 0;
    let mut transaction_count = 0;
    for row in rows {
        match row.flow {
            Flow::Income => total_income_cents = row.total_cents,
            Flow::Expense => total_expense_cents = row.total_cents,
        }
        transaction_count += row.count;
    }

    Ok(MonthlySummary {
        year: period.year(),
        month: period.month(),
        total_income_cents,
        total_expense_cents,
        balance_cents: total_income_cents - total_expense_cents,
        transaction_count,
    })
}
