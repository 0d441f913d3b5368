//! Shared test utilities for `LedgerLens`.
//!
//! This module provides common helper functions for setting up test databases
//! and seeding categories and transactions with sensible defaults.

use crate::{
    entities::{Flow, TransactionKind, category, transaction},
    errors::Result,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Midday UTC on the given date. Midday keeps seeded transactions safely
/// inside inclusive day-level bounds used by the tests.
#[must_use]
pub fn utc_datetime(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("test dates are valid")
        .and_hms_opt(12, 0, 0)
        .expect("midday is a valid time")
        .and_utc()
}

/// Creates a test category with no icon or color.
pub async fn create_test_category(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    flow: Flow,
) -> Result<category::Model> {
    create_custom_category(db, user_id, name, None, None, flow).await
}

/// Creates a test category with explicit display metadata.
pub async fn create_custom_category(
    db: &DatabaseConnection,
    user_id: i64,
    name: &str,
    icon: Option<&str>,
    color: Option<&str>,
    flow: Flow,
) -> Result<category::Model> {
    let now = Utc::now();
    let model = category::ActiveModel {
        user_id: Set(user_id),
        name: Set(name.to_string()),
        icon: Set(icon.map(str::to_string)),
        color: Set(color.map(str::to_string)),
        flow: Set(flow),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}

/// Creates a test transaction.
///
/// # Defaults
/// * `description`: `"Test transaction"`
/// * `kind`: [`TransactionKind::Variable`]
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    user_id: i64,
    category_id: Option<i64>,
    amount_cents: i64,
    flow: Flow,
    occurred_at: DateTime<Utc>,
) -> Result<transaction::Model> {
    let now = Utc::now();
    let model = transaction::ActiveModel {
        user_id: Set(user_id),
        category_id: Set(category_id),
        description: Set("Test transaction".to_string()),
        amount_cents: Set(amount_cents),
        flow: Set(flow),
        kind: Set(TransactionKind::Variable),
        occurred_at: Set(occurred_at),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}
