use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::errors::{Error, Result, ValidationError};

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Builds a month from its year and 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "month must be between 1 and 12, got {}",
                month
            ))));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "year {} is out of range",
                    year
                )))
            })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(i64::from(self.days_in_month()) - 1)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// The date for `day` in this month, clipped to the month's last day.
    /// Day 0 is treated as day 1.
    pub fn clipped_day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days_in_month());
        self.first + Duration::days(i64::from(day) - 1)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first && date <= self.last_day()
    }

    pub fn next(&self) -> Option<Self> {
        self.last_day().succ_opt().map(|first| Self { first })
    }

    pub fn prev(&self) -> Option<Self> {
        self.first.pred_opt().map(Self::of)
    }

    /// Walks `count` months back. Returns `None` past the calendar's range.
    pub fn months_back(&self, count: u32) -> Option<Self> {
        let mut current = *self;
        for _ in 0..count {
            current = current.prev()?;
        }
        Some(current)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Resolves an IANA zone name such as `America/Sao_Paulo`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    Tz::from_str(name.trim())
        .map_err(|_| Error::InvalidConfigValue(format!("unknown timezone '{}'", name)))
}

/// Converts a UTC instant to the calendar day it falls on in `tz`.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar day in `tz`.
pub fn local_today(tz: Tz) -> NaiveDate {
    local_date_from_utc(Utc::now(), tz)
}

/// Parses a stored date into a local calendar day.
///
/// A bare `YYYY-MM-DD` is taken as-is and never shifted through UTC. An
/// RFC 3339 instant is converted into `tz` first. A timestamp without an
/// offset is read as local wall-clock time. Anything else yields `None`.
pub fn parse_local_date(raw: &str, tz: Tz) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(local_date_from_utc(instant.with_timezone(&Utc), tz));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.date())
}
