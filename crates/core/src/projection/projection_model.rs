use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::YearMonth;

/// Where the viewed month sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PeriodPosition {
    Past,
    Current,
    Future,
}

impl PeriodPosition {
    pub fn of(period: YearMonth, today: NaiveDate) -> Self {
        let current = YearMonth::of(today);
        if period < current {
            PeriodPosition::Past
        } else if period == current {
            PeriodPosition::Current
        } else {
            PeriodPosition::Future
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, PeriodPosition::Current)
    }
}

/// One calendar day of the projection chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_linear: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_recent: Option<Decimal>,
}

/// Intermediate figures behind the two baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionStats {
    pub days_elapsed: u32,
    pub total_days_in_month: u32,
    pub avg_per_day: Decimal,
    pub weight_current: Decimal,
    pub historical_avg_net: Decimal,
    pub historical_samples: usize,
    pub combined_avg_per_day: Decimal,
    pub recent_avg_per_day: Decimal,
    pub last_real_day: u32,
    pub last_real_balance: Decimal,
}

/// Output of the projection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub position: PeriodPosition,
    pub stats: ProjectionStats,
    pub series: Vec<ProjectionPoint>,
}
