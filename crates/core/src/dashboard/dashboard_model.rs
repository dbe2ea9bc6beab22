//! Request and payload models for the dashboard.

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ledger::{BalancePoint, DailyLedger, PeriodTotals};
use crate::projection::{ProjectionPoint, ProjectionStats};
use crate::transactions::WalletFilter;
use crate::utils::{local_today, YearMonth};

/// A month viewed on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub year: i32,
    pub month: u32,
    /// Calendar day the engine treats as "now".
    pub today: NaiveDate,
    #[serde(default)]
    pub wallets: Option<WalletFilter>,
}

impl ProjectionRequest {
    pub fn new(year: i32, month: u32, today: NaiveDate) -> Self {
        Self {
            year,
            month,
            today,
            wallets: None,
        }
    }

    /// A request viewed on the current calendar day in `tz`.
    pub fn today_in(year: i32, month: u32, tz: Tz) -> Self {
        Self::new(year, month, local_today(tz))
    }

    pub fn with_wallets(mut self, wallets: WalletFilter) -> Self {
        self.wallets = Some(wallets);
        self
    }

    /// Validated month under view.
    pub fn period(&self) -> Result<YearMonth> {
        YearMonth::new(self.year, self.month)
    }
}

/// Everything the dashboard charts and summary cards need for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthProjection {
    pub period: YearMonth,
    pub today: NaiveDate,
    pub opening_balance: Decimal,
    pub daily_ledger: DailyLedger,
    pub daily_balance_series: Vec<BalancePoint>,
    pub projection_series: Vec<ProjectionPoint>,
    pub stats: ProjectionStats,
    pub daily_limit: Decimal,
    pub totals: PeriodTotals,
}

/// Income, expense and net of one month of the overview chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashFlow {
    pub period: YearMonth,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl MonthlyCashFlow {
    pub fn new(period: YearMonth, totals: PeriodTotals) -> Self {
        Self {
            period,
            income: totals.income,
            expense: totals.expense,
            net: totals.net,
        }
    }
}
