//! Daily Ledger Aggregator and Balance Trajectory Builder.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::ledger_model::{BalancePoint, BalanceSeries, DailyLedger};
use crate::recurrence::Occurrence;
use crate::transactions::DateRange;

/// Folds occurrences into per-day buckets.
pub fn aggregate(occurrences: &[Occurrence]) -> DailyLedger {
    occurrences
        .iter()
        .fold(DailyLedger::new(), |mut ledger, occurrence| {
            ledger.record(occurrence.date, occurrence.kind, occurrence.amount);
            ledger
        })
}

/// Folds only the occurrences dated inside `range`.
pub fn aggregate_within(occurrences: &[Occurrence], range: DateRange) -> DailyLedger {
    occurrences
        .iter()
        .filter(|occurrence| range.contains(occurrence.date))
        .fold(DailyLedger::new(), |mut ledger, occurrence| {
            ledger.record(occurrence.date, occurrence.kind, occurrence.amount);
            ledger
        })
}

/// Builds the running balance over the ledger's days in ascending order.
pub fn build_trajectory(ledger: &DailyLedger, opening_balance: Decimal) -> BalanceSeries {
    let mut running = opening_balance;
    let points = ledger
        .iter()
        .map(|(date, totals)| {
            running += totals.net();
            BalancePoint {
                date: *date,
                balance: running,
            }
        })
        .collect();

    BalanceSeries {
        opening_balance,
        points,
    }
}

/// Cumulative net of every occurrence dated strictly before `period_start`.
///
/// This is the same trajectory evaluated over all prior history, so the
/// result equals the last balance of `build_trajectory` over that window.
pub fn opening_balance(occurrences: &[Occurrence], period_start: NaiveDate) -> Decimal {
    let Some(day_before) = period_start.checked_sub_signed(Duration::days(1)) else {
        return Decimal::ZERO;
    };
    let history = aggregate_within(occurrences, DateRange::through(day_before));
    build_trajectory(&history, Decimal::ZERO).last_balance()
}
