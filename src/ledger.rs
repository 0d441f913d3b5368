//! Ledger Query Port - grouped aggregation queries over the transaction ledger.
//!
//! The calculators in [`crate::core`] never touch raw transaction rows; they
//! consume the three pushed-down aggregations defined here. Each function is a
//! single grouped `SELECT`, filtered to one user, with inclusive date bounds.
//! Summed amounts are integer cents end to end, so grouping and re-grouping
//! never drifts.

use crate::{
    entities::{Flow, Transaction, category, transaction},
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, sea_query::Expr,
};
use tracing::{debug, instrument};

/// Year extracted from `occurred_at`; `SQLite` stores `DateTimeUtc` as ISO-8601
/// text, which `strftime` understands directly.
const YEAR_OF_OCCURRENCE: &str = r#"CAST(strftime('%Y', "transactions"."occurred_at") AS INTEGER)"#;
/// Month (1-12) extracted from `occurred_at`.
const MONTH_OF_OCCURRENCE: &str =
    r#"CAST(strftime('%m', "transactions"."occurred_at") AS INTEGER)"#;

/// Per-flow sum and row count for a date range.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct FlowTotal {
    /// Income or expense
    pub flow: Flow,
    /// Summed amount in cents
    pub total_cents: i64,
    /// Number of transactions summed
    pub count: i64,
}

/// Per-(category, flow) sum, count, and joined category metadata.
///
/// Uncategorized transactions form their own group with all category fields
/// `None`; they are never dropped.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct CategoryTotal {
    /// Category the group belongs to, if any
    pub category_id: Option<i64>,
    /// Joined category name, `None` for uncategorized rows
    pub category_name: Option<String>,
    /// Joined category icon
    pub category_icon: Option<String>,
    /// Joined category color
    pub category_color: Option<String>,
    /// Income or expense
    pub flow: Flow,
    /// Summed amount in cents
    pub total_cents: i64,
    /// Number of transactions summed
    pub count: i64,
}

/// Per-(calendar month, flow) sum.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct MonthFlowTotal {
    /// Calendar year of the group
    pub year: i32,
    /// Calendar month of the group (1-12)
    pub month: u32,
    /// Income or expense
    pub flow: Flow,
    /// Summed amount in cents
    pub total_cents: i64,
}

/// Sums one user's transactions in `[start, end]`, grouped by flow.
///
/// Returns at most two rows (one per flow); flows with no transactions in
/// range produce no row, which callers must treat as zero.
#[instrument(skip(db))]
pub async fn sum_by_flow(
    db: &DatabaseConnection,
    user_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<FlowTotal>> {
    let rows = Transaction::find()
        .select_only()
        .column(transaction::Column::Flow)
        .column_as(transaction::Column::AmountCents.sum(), "total_cents")
        .column_as(transaction::Column::Id.count(), "count")
        .filter(transaction::Column::UserId.eq(user_id))
        .filter(transaction::Column::OccurredAt.gte(start))
        .filter(transaction::Column::OccurredAt.lte(end))
        .group_by(transaction::Column::Flow)
        .into_model::<FlowTotal>()
        .all(db)
        .await?;

    debug!(rows = rows.len(), "summed transactions by flow");
    Ok(rows)
}

/// Sums one user's transactions in `[start, end]`, grouped by (category, flow),
/// optionally restricted to a single flow.
///
/// Category metadata is left-joined so uncategorized transactions appear as a
/// group with null category fields. Rows are ordered by summed amount,
/// largest first; that ordering is part of the calling contract, not an
/// accident of the query plan.
#[instrument(skip(db))]
pub async fn sum_by_category_and_flow(
    db: &DatabaseConnection,
    user_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    flow: Option<Flow>,
) -> Result<Vec<CategoryTotal>> {
    let mut query = Transaction::find()
        .select_only()
        .column(transaction::Column::CategoryId)
        .column_as(category::Column::Name, "category_name")
        .column_as(category::Column::Icon, "category_icon")
        .column_as(category::Column::Color, "category_color")
        .column(transaction::Column::Flow)
        .column_as(transaction::Column::AmountCents.sum(), "total_cents")
        .column_as(transaction::Column::Id.count(), "count")
        .join(JoinType::LeftJoin, transaction::Relation::Category.def())
        .filter(transaction::Column::UserId.eq(user_id))
        .filter(transaction::Column::OccurredAt.gte(start))
        .filter(transaction::Column::OccurredAt.lte(end));

    if let Some(flow) = flow {
        query = query.filter(transaction::Column::Flow.eq(flow));
    }

    let rows = query
        .group_by(transaction::Column::CategoryId)
        .group_by(transaction::Column::Flow)
        .group_by(category::Column::Name)
        .group_by(category::Column::Icon)
        .group_by(category::Column::Color)
        .order_by_desc(transaction::Column::AmountCents.sum())
        .into_model::<CategoryTotal>()
        .all(db)
        .await?;

    debug!(rows = rows.len(), "summed transactions by category and flow");
    Ok(rows)
}

/// Sums one user's transactions in `[start, end]`, grouped by calendar month
/// and flow, in chronological order.
///
/// Months with no transactions produce no row; the cash-flow builder is
/// responsible for densifying the window.
#[instrument(skip(db))]
pub async fn sum_by_year_month_flow(
    db: &DatabaseConnection,
    user_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<MonthFlowTotal>> {
    let year = Expr::cust(YEAR_OF_OCCURRENCE);
    let month = Expr::cust(MONTH_OF_OCCURRENCE);

    let rows = Transaction::find()
        .select_only()
        .column_as(year.clone(), "year")
        .column_as(month.clone(), "month")
        .column(transaction::Column::Flow)
        .column_as(transaction::Column::AmountCents.sum(), "total_cents")
        .filter(transaction::Column::UserId.eq(user_id))
        .filter(transaction::Column::OccurredAt.gte(start))
        .filter(transaction::Column::OccurredAt.lte(end))
        .group_by(year.clone())
        .group_by(month.clone())
        .group_by(transaction::Column::Flow)
        .order_by(year, Order::Asc)
        .order_by(month, Order::Asc)
        .into_model::<MonthFlowTotal>()
        .all(db)
        .await?;

    debug!(rows = rows.len(), "summed transactions by month and flow");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_sum_by_flow_groups_and_counts() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_transaction(&db, 1, None, 10_000, Flow::Income, utc_datetime(2024, 3, 5))
            .await?;
        create_test_transaction(&db, 1, None, 5_000, Flow::Income, utc_datetime(2024, 3, 10))
            .await?;
        create_test_transaction(&db, 1, None, 3_000, Flow::Expense, utc_datetime(2024, 3, 20))
            .await?;

        let rows = sum_by_flow(
            &db,
            1,
            utc_datetime(2024, 3, 1),
            utc_datetime(2024, 3, 31),
        )
        .await?;

        assert_eq!(rows.len(), 2);
        let income = rows.iter().find(|r| r.flow == Flow::Income).unwrap();
        let expense = rows.iter().find(|r| r.flow == Flow::Expense).unwrap();
        assert_eq!(income.total_cents, 15_000);
        assert_eq!(income.count, 2);
        assert_eq!(expense.total_cents, 3_000);
        assert_eq!(expense.count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sum_by_flow_respects_bounds_and_user() -> Result<()> {
        let db = setup_test_db().await?;
        // In range, right user
        create_test_transaction(&db, 1, None, 1_000, Flow::Income, utc_datetime(2024, 3, 15))
            .await?;
        // Out of range
        create_test_transaction(&db, 1, None, 2_000, Flow::Income, utc_datetime(2024, 4, 1))
            .await?;
        // In range, other user
        create_test_transaction(&db, 2, None, 4_000, Flow::Income, utc_datetime(2024, 3, 15))
            .await?;

        let rows = sum_by_flow(
            &db,
            1,
            utc_datetime(2024, 3, 1),
            utc_datetime(2024, 3, 31),
        )
        .await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_cents, 1_000);
        assert_eq!(rows[0].count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_sum_by_flow_empty_range() -> Result<()> {
        let db = setup_test_db().await?;

        let rows = sum_by_flow(
            &db,
            1,
            utc_datetime(2024, 3, 1),
            utc_datetime(2024, 3, 31),
        )
        .await?;

        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_sum_by_category_orders_descending_and_joins_metadata() -> Result<()> {
        let db = setup_test_db().await?;
        let food = create_custom_category(&db, 1, "Food", Some("🍔"), Some("#ff0000"), Flow::Expense)
            .await?;
        let transport = create_test_category(&db, 1, "Transport", Flow::Expense).await?;
        create_test_transaction(
            &db,
            1,
            Some(food.id),
            4_000,
            Flow::Expense,
            utc_datetime(2024, 3, 5),
        )
        .await?;
        create_test_transaction(
            &db,
            1,
            Some(transport.id),
            6_000,
            Flow::Expense,
            utc_datetime(2024, 3, 6),
        )
        .await?;

        let rows = sum_by_category_and_flow(
            &db,
            1,
            utc_datetime(2024, 3, 1),
            utc_datetime(2024, 3, 31),
            None,
        )
        .await?;

        assert_eq!(rows.len(), 2);
        // Largest contributor first
        assert_eq!(rows[0].category_name.as_deref(), Some("Transport"));
        assert_eq!(rows[0].total_cents, 6_000);
        assert_eq!(rows[1].category_name.as_deref(), Some("Food"));
        assert_eq!(rows[1].category_icon.as_deref(), Some("🍔"));
        assert_eq!(rows[1].category_color.as_deref(), Some("#ff0000"));
        Ok(())
    }

    #[tokio::test]
    async fn test_sum_by_category_keeps_uncategorized_rows() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_transaction(&db, 1, None, 2_500, Flow::Expense, utc_datetime(2024, 3, 5))
            .await?;

        let rows = sum_by_category_and_flow(
            &db,
            1,
            utc_datetime(2024, 3, 1),
            utc_datetime(2024, 3, 31),
            None,
        )
        .await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_id, None);
        assert_eq!(rows[0].category_name, None);
        assert_eq!(rows[0].total_cents, 2_500);
        Ok(())
    }

    #[tokio::test]
    async fn test_sum_by_category_flow_filter() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_transaction(&db, 1, None, 9_000, Flow::Income, utc_datetime(2024, 3, 5))
            .await?;
        create_test_transaction(&db, 1, None, 2_000, Flow::Expense, utc_datetime(2024, 3, 6))
            .await?;

        let rows = sum_by_category_and_flow(
            &db,
            1,
            utc_datetime(2024, 3, 1),
            utc_datetime(2024, 3, 31),
            Some(Flow::Expense),
        )
        .await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].flow, Flow::Expense);
        assert_eq!(rows[0].total_cents, 2_000);
        Ok(())
    }

    #[tokio::test]
    async fn test_sum_by_year_month_flow_across_year_boundary() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_transaction(&db, 1, None, 1_000, Flow::Income, utc_datetime(2023, 12, 15))
            .await?;
        create_test_transaction(&db, 1, None, 2_000, Flow::Income, utc_datetime(2024, 1, 15))
            .await?;
        create_test_transaction(&db, 1, None, 500, Flow::Expense, utc_datetime(2024, 1, 20))
            .await?;

        let rows = sum_by_year_month_flow(
            &db,
            1,
            utc_datetime(2023, 12, 1),
            utc_datetime(2024, 1, 31),
        )
        .await?;

        assert_eq!(rows.len(), 3);
        // Chronological: December 2023 before January 2024
        assert_eq!((rows[0].year, rows[0].month), (2023, 12));
        assert_eq!(rows[0].total_cents, 1_000);
        assert!(rows[1..].iter().all(|r| (r.year, r.month) == (2024, 1)));
        Ok(())
    }
}
