//! Daily ledger and balance series models.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionKind;

/// Income and expense summed for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl DailyTotals {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Per-day buckets keyed by local calendar day.
///
/// Only days with at least one occurrence have an entry. Keys iterate in
/// ascending date order and serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyLedger {
    days: BTreeMap<NaiveDate, DailyTotals>,
}

impl DailyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an amount to the day's bucket. Buckets accumulate.
    pub fn record(&mut self, date: NaiveDate, kind: TransactionKind, amount: Decimal) {
        let bucket = self.days.entry(date).or_default();
        match kind {
            TransactionKind::Income => bucket.income += amount,
            TransactionKind::Expense => bucket.expense += amount,
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyTotals> {
        self.days.get(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DailyTotals)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of every bucket.
    pub fn totals(&self) -> PeriodTotals {
        let (income, expense) = self
            .days
            .values()
            .fold((Decimal::ZERO, Decimal::ZERO), |(income, expense), day| {
                (income + day.income, expense + day.expense)
            });
        PeriodTotals::new(income, expense)
    }
}

/// Running balance at the end of a day with activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Cumulative balance trajectory, one point per day with activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSeries {
    pub opening_balance: Decimal,
    pub points: Vec<BalancePoint>,
}

impl BalanceSeries {
    /// Last running balance, or the opening balance when there is no activity.
    pub fn last_balance(&self) -> Decimal {
        self.points
            .last()
            .map_or(self.opening_balance, |point| point.balance)
    }

    /// Balance on exactly `date`, if that day had activity.
    pub fn balance_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.points
            .binary_search_by_key(&date, |point| point.date)
            .ok()
            .map(|index| self.points[index].balance)
    }

    /// Running balance at the end of `date`, carrying the latest earlier
    /// point forward and starting from the opening balance.
    pub fn balance_as_of(&self, date: NaiveDate) -> Decimal {
        let index = self.points.partition_point(|point| point.date <= date);
        if index == 0 {
            self.opening_balance
        } else {
            self.points[index - 1].balance
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Income, expense and net over a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl PeriodTotals {
    pub fn new(income: Decimal, expense: Decimal) -> Self {
        Self {
            income,
            expense,
            net: income - expense,
        }
    }
}
