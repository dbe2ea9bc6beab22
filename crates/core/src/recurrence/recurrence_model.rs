use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::RECURRENCE_EPOCH;
use crate::transactions::TransactionKind;

/// A monthly recurring income or expense template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDefinition {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Only used to infer the day of month when none is set.
    pub anchor_date: Option<NaiveDate>,
    pub day_of_month: Option<u32>,
    #[serde(default)]
    pub excluded_dates: BTreeSet<NaiveDate>,
}

impl RecurringDefinition {
    pub fn new(id: impl Into<String>, kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            kind,
            amount,
            start_date: None,
            end_date: None,
            anchor_date: None,
            day_of_month: None,
            excluded_dates: BTreeSet::new(),
        }
    }

    pub fn starting(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn anchored_at(mut self, anchor_date: NaiveDate) -> Self {
        self.anchor_date = Some(anchor_date);
        self
    }

    pub fn on_day(mut self, day_of_month: u32) -> Self {
        self.day_of_month = Some(day_of_month);
        self
    }

    pub fn excluding(mut self, date: NaiveDate) -> Self {
        self.excluded_dates.insert(date);
        self
    }

    /// First active day: start date, else anchor date, else the epoch.
    pub fn recurrence_start(&self) -> NaiveDate {
        self.start_date.or(self.anchor_date).unwrap_or_else(|| {
            let (year, month, day) = RECURRENCE_EPOCH;
            NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
        })
    }

    /// Last active day for a given cutoff.
    pub fn recurrence_end(&self, cutoff: NaiveDate) -> NaiveDate {
        self.end_date.map_or(cutoff, |end| end.min(cutoff))
    }

    /// Day of month the occurrence targets before clipping.
    pub fn target_day(&self) -> u32 {
        match self.day_of_month {
            Some(day) if day > 0 => day,
            _ => self.anchor_date.map_or(1, |anchor| anchor.day()),
        }
    }
}

/// Where an occurrence came from. Weak reference, no ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccurrenceSource {
    Recurring(String),
    OneOff(String),
}

impl OccurrenceSource {
    pub fn id(&self) -> &str {
        match self {
            OccurrenceSource::Recurring(id) | OccurrenceSource::OneOff(id) => id,
        }
    }
}

/// A dated, amount-bearing cash movement. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub source: OccurrenceSource,
}

/// A classified repository row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerRecord {
    /// A one-off transaction, already dated.
    OneOff(Occurrence),
    /// A recurring template that still has to be expanded.
    RawTemplate(RecurringDefinition),
    /// A recurring occurrence the repository already expanded.
    Materialized(Occurrence),
}
