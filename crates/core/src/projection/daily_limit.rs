use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::projection_model::PeriodPosition;
use crate::utils::YearMonth;

/// Average amount that may still be spent per remaining day while ending
/// the month at zero. Negative when the month is already in deficit.
/// Closed months get zero.
pub fn daily_limit(month_net_so_far: Decimal, today: NaiveDate, period: YearMonth) -> Decimal {
    let reference_day = match PeriodPosition::of(period, today) {
        PeriodPosition::Past => return Decimal::ZERO,
        PeriodPosition::Current => today.day(),
        PeriodPosition::Future => 1,
    };

    let days_remaining = (period.days_in_month() + 1)
        .saturating_sub(reference_day)
        .max(1);
    month_net_so_far / Decimal::from(days_remaining)
}
