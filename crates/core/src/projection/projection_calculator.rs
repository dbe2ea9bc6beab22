//! Projection Engine: blends the month-to-date pace with history and the
//! recent trend into two forward baselines.

use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::Decimal;

use super::history_sampler::historical_avg_net;
use super::projection_model::{PeriodPosition, Projection, ProjectionPoint, ProjectionStats};
use crate::ledger::{BalancePoint, BalanceSeries};
use crate::utils::YearMonth;

/// Days of the period counted as observed.
fn days_elapsed(position: PeriodPosition, today: NaiveDate, total_days: u32) -> u32 {
    match position {
        PeriodPosition::Past => total_days,
        PeriodPosition::Current => today.day().min(total_days),
        PeriodPosition::Future => 0,
    }
}

/// Last day treated as real data rather than projection.
fn last_real_day(
    position: PeriodPosition,
    trajectory: &BalanceSeries,
    today: NaiveDate,
    total_days: u32,
) -> u32 {
    match position {
        PeriodPosition::Current => today.day().min(total_days),
        PeriodPosition::Past => trajectory.points.last().map_or(0, |point| point.date.day()),
        PeriodPosition::Future => 0,
    }
}

/// Average daily change over the last `window` points up to `last_real_date`.
/// `None` when fewer than two points are available.
fn recent_avg_per_day(
    trajectory: &BalanceSeries,
    last_real_date: Option<NaiveDate>,
    window: usize,
) -> Option<Decimal> {
    let last_real_date = last_real_date?;
    let upto = trajectory
        .points
        .partition_point(|point| point.date <= last_real_date);
    let observed: &[BalancePoint] = &trajectory.points[..upto];
    let recent = &observed[observed.len().saturating_sub(window)..];

    match recent {
        [first, .., last] => {
            let variation = last.balance - first.balance;
            let day_span = (last.date - first.date).num_days().max(1);
            Some(variation / Decimal::from(day_span))
        }
        _ => None,
    }
}

/// Projects the month's balance trajectory.
///
/// `historical_samples` are the monthly nets of preceding months; an empty
/// list triggers the month-to-date fallback. Past and future months get no
/// baselines.
pub fn project(
    trajectory: &BalanceSeries,
    period: YearMonth,
    today: NaiveDate,
    historical_samples: &[Decimal],
    recent_window_points: usize,
) -> Projection {
    let position = PeriodPosition::of(period, today);
    let total_days = period.days_in_month();
    let total = Decimal::from(total_days);
    let opening_balance = trajectory.opening_balance;

    let elapsed = days_elapsed(position, today, total_days);
    let current_net = trajectory.last_balance() - opening_balance;
    let avg_per_day = if elapsed == 0 {
        Decimal::ZERO
    } else {
        current_net / Decimal::from(elapsed)
    };

    let weight_current = Decimal::from(elapsed) / total;
    let historical_avg = historical_avg_net(historical_samples, avg_per_day, elapsed);
    let combined_avg_per_day =
        weight_current * avg_per_day + (Decimal::ONE - weight_current) * (historical_avg / total);

    let last_real = last_real_day(position, trajectory, today, total_days);
    let last_real_date = (last_real > 0).then(|| period.clipped_day(last_real));
    let last_real_balance =
        last_real_date.map_or(opening_balance, |date| trajectory.balance_as_of(date));

    let recent_avg = recent_avg_per_day(trajectory, last_real_date, recent_window_points)
        .unwrap_or(avg_per_day);

    let series = (1..=total_days)
        .map(|day| {
            let date = period.clipped_day(day);
            let observed = if day <= last_real {
                trajectory.balance_on(date)
            } else {
                None
            };

            let (baseline_linear, baseline_recent) = if !position.is_current() {
                (None, None)
            } else if day <= last_real {
                let anchored = observed.unwrap_or_else(|| trajectory.balance_as_of(date));
                (Some(anchored), Some(anchored))
            } else {
                let ahead = Decimal::from(day - last_real);
                (
                    Some(last_real_balance + combined_avg_per_day * ahead),
                    Some(last_real_balance + recent_avg * ahead),
                )
            };

            ProjectionPoint {
                day,
                observed,
                baseline_linear,
                baseline_recent,
            }
        })
        .collect();

    debug!(
        "Projected {} ({:?}): avg/day {}, combined {}, recent {}, last real day {}",
        period, position, avg_per_day, combined_avg_per_day, recent_avg, last_real
    );

    Projection {
        position,
        stats: ProjectionStats {
            days_elapsed: elapsed,
            total_days_in_month: total_days,
            avg_per_day,
            weight_current,
            historical_avg_net: historical_avg,
            historical_samples: historical_samples.len(),
            combined_avg_per_day,
            recent_avg_per_day: recent_avg,
            last_real_day: last_real,
            last_real_balance,
        },
        series,
    }
}
