//! Core aggregation engine - framework-agnostic financial calculators.
//!
//! Four independent, stateless calculators turn Ledger Query Port results
//! into derived summaries: one calendar month ([`monthly`]), a per-category
//! distribution over an arbitrary range ([`categories`]), a dense trailing
//! window of monthly cash flow ([`cashflow`]), and a paired comparison of two
//! months ([`compare`]). All of them take pre-validated period types from
//! [`period`], keep money in integer cents, and model "no data" as zeros,
//! never as errors.

pub mod categories;
pub mod cashflow;
pub mod compare;
pub mod monthly;
pub mod period;

/// Rounds to two decimal places, the precision of every reported percentage.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(50.0), 50.0);
        assert_eq!(round2(-12.346), -12.35);
    }
}
