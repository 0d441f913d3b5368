//! Unified error type for `LedgerLens`.
//!
//! Storage failures propagate unchanged from `SeaORM`; the period errors are
//! produced only at the boundary where raw year/month/window numbers are
//! turned into validated types. "No data" conditions are never errors.

use thiserror::Error;

/// All errors that can surface from the library or the binary.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or startup error
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Year outside the supported 4-digit range
    #[error("Invalid year {year}, expected a positive 4-digit year")]
    InvalidYear {
        /// The rejected year
        year: i32,
    },

    /// Month outside 1-12
    #[error("Invalid month {month}, expected 1-12")]
    InvalidMonth {
        /// The rejected month
        month: u32,
    },

    /// Cash-flow window size outside 1-12
    #[error("Invalid cash-flow window of {months} months, expected 1-12")]
    InvalidWindow {
        /// The rejected window size
        months: u32,
    },

    /// Database error from the storage layer
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    /// Malformed numeric command-line argument
    #[error("Invalid numeric argument: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
