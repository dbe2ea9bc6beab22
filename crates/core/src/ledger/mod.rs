//! Per-day ledger, balance trajectory and opening balance.

mod ledger_calculator;
mod ledger_model;

pub use ledger_calculator::{aggregate, aggregate_within, build_trajectory, opening_balance};
pub use ledger_model::{BalancePoint, BalanceSeries, DailyLedger, DailyTotals, PeriodTotals};

#[cfg(test)]
mod ledger_calculator_tests;
