//! Month Comparator.
//!
//! Compares two arbitrary calendar months metric by metric. The two monthly
//! lookups are independent, so they run concurrently and are joined before
//! any delta is derived.
//!
//! Relative change against a zero baseline follows a fixed policy instead of
//! dividing: 0 -> 0 reports 0%, and 0 -> anything else reports 100% (a
//! sentinel for "infinite relative growth"). The comparator therefore never
//! produces NaN or an infinity.

use crate::{
    core::{
        monthly::{MonthlySummary, monthly_summary},
        period::YearMonth,
        round2,
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// Absolute and relative deltas between two months, metric by metric.
/// Deltas are B minus A.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthDelta {
    /// Income delta in cents
    pub income_cents: i64,
    /// Income delta relative to month A, percent
    pub income_percentage: f64,
    /// Expense delta in cents
    pub expense_cents: i64,
    /// Expense delta relative to month A, percent
    pub expense_percentage: f64,
    /// Balance delta in cents
    pub balance_cents: i64,
    /// Balance delta relative to month A, percent
    pub balance_percentage: f64,
}

/// Two monthly summaries and their differences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthComparison {
    /// The baseline month
    pub month_a: MonthlySummary,
    /// The month being compared against the baseline
    pub month_b: MonthlySummary,
    /// B minus A, absolute and relative
    pub difference: MonthDelta,
}

/// Relative change from `baseline` to `value`, in percent.
///
/// With a non-zero baseline this is `(value - baseline) / |baseline| * 100`
/// rounded to 2 decimals; the absolute value keeps the sign of the change
/// meaningful when the baseline is negative (a balance can be). A zero
/// baseline short-circuits to 0 or 100 without dividing.
#[must_use]
pub fn relative_change(baseline: i64, value: i64) -> f64 {
    if baseline == 0 {
        return if value == 0 { 0.0 } else { 100.0 };
    }
    round2((value - baseline) as f64 / baseline.abs() as f64 * 100.0)
}

/// Compares two months of one user's ledger. A and B may be any two valid
/// months, in either order; deltas are always B minus A.
///
/// # Errors
/// Propagates storage failures from the Ledger Query Port unchanged.
pub async fn month_comparison(
    db: &DatabaseConnection,
    user_id: i64,
    period_a: YearMonth,
    period_b: YearMonth,
) -> Result<MonthComparison> {
    // The lookups are independent; run them concurrently
    let (month_a, month_b) = tokio::try_join!(
        monthly_summary(db, user_id, period_a),
        monthly_summary(db, user_id, period_b),
    )?;

    let difference = MonthDelta {
        income_cents: month_b.total_income_cents - month_a.total_income_cents,
        income_percentage: relative_change(month_a.total_income_cents, month_b.total_income_cents),
        expense_cents: month_b.total_expense_cents - month_a.total_expense_cents,
        expense_percentage: relative_change(
            month_a.total_expense_cents,
            month_b.total_expense_cents,
        ),
        balance_cents: month_b.balance_cents - month_a.balance_cents,
        balance_percentage: relative_change(month_a.balance_cents, month_b.balance_cents),
    };

    Ok(MonthComparison {
        month_a,
        month_b,
        difference,
    })
}
