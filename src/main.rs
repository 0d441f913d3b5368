//! Snapshot binary: prints the current month's summary and a trailing
//! cash-flow window for one user of the ledger database.
//!
//! Usage: `ledgerlens <user_id> [window_months]`

use chrono::Utc;
use dotenvy::dotenv;
use ledgerlens::{
    config,
    core::{
        cashflow::cash_flow,
        monthly::monthly_summary,
        period::{WindowSize, YearMonth},
    },
    errors::{Error, Result},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Formats integer cents as a decimal amount, e.g. `-1234` -> `-12.34`.
fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Non-fatal: env vars can be set externally
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let user_id: i64 = args
        .next()
        .ok_or_else(|| Error::Config {
            message: "usage: ledgerlens <user_id> [window_months]".to_string(),
        })?
        .parse()?;
    let window = match args.next() {
        Some(raw) => WindowSize::new(raw.parse()?)?,
        None => WindowSize::default(),
    };

    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("Database initialized successfully.");

    let now = Utc::now();
    let period = YearMonth::containing(&now);

    let summary = monthly_summary(&db, user_id, period).await?;
    println!(
        "{period}: income {} | expense {} | balance {} | {} transactions",
        money(summary.total_income_cents),
        money(summary.total_expense_cents),
        money(summary.balance_cents),
        summary.transaction_count
    );

    let flow = cash_flow(&db, user_id, window, now).await?;
    println!("Cash flow, last {} months:", flow.months);
    for item in &flow.data {
        println!(
            "  {:04}-{:02}  income {:>12}  expense {:>12}  balance {:>12}",
            item.year,
            item.month,
            money(item.income_cents),
            money(item.expense_cents),
            money(item.balance_cents)
        );
    }
    println!(
        "  totals   income {:>12}  expense {:>12}  balance {:>12}",
        money(flow.totals.income_cents),
        money(flow.totals.expense_cents),
        money(flow.totals.balance_cents)
    );

    Ok(())
}
