//! `LedgerLens` - Personal finance analytics over a transaction ledger
//!
//! This crate turns a raw ledger of categorized income/expense transactions
//! into time-windowed, categorized, and comparative summaries: monthly
//! totals, per-category distributions, trailing cash-flow windows, and
//! month-vs-month comparisons. Storage is consumed through a small set of
//! grouped queries; the calculators themselves are pure and stateless.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
    clippy::cast_precision_loss,       // i64 cents -> f64 percentages is fine at ledger scale
)]

/// Configuration management for database settings
pub mod config;
/// Core aggregation engine - the four financial calculators
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Ledger Query Port - grouped aggregation queries over the ledger
pub mod ledger;

#[cfg(test)]
pub mod test_utils;
