//! Transaction snapshot models exchanged with the external repository.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::RECURRENCE_EPOCH;

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }
}

/// Storage type of a row. `FIXED` rows are monthly recurring templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    #[serde(alias = "VARIABLE")]
    Punctual,
    #[serde(alias = "RECURRING")]
    Fixed,
}

/// Inclusive calendar range used to bound repository queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Everything from the recurrence epoch up to and including `end`.
    pub fn through(end: NaiveDate) -> Self {
        let (year, month, day) = RECURRENCE_EPOCH;
        let epoch = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);
        Self {
            start: epoch.min(end),
            end,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Opaque wallet selection forwarded to the repository untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletFilter(pub Vec<String>);

impl WalletFilter {
    /// Parses a comma separated id list; blank entries are dropped.
    pub fn from_csv(raw: &str) -> Option<Self> {
        let ids: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if ids.is_empty() {
            None
        } else {
            Some(Self(ids))
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// A single repository query: one kind, one bounded range, optional wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    pub kind: TransactionKind,
    pub range: DateRange,
    pub wallets: Option<WalletFilter>,
}

/// A transaction row as stored. Every field may be dirty.
///
/// `materialized` is set by repositories that expand `FIXED` templates
/// themselves for a bounded query; such rows are dated occurrences and
/// must not be expanded again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default)]
    pub id: String,
    pub kind: TransactionKind,
    #[serde(default, deserialize_with = "deserialize_raw_amount")]
    pub amount: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub day_of_month: Option<i64>,
    #[serde(default, rename = "type")]
    pub record_type: Option<RecordType>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
    #[serde(default)]
    pub materialized: bool,
    #[serde(default)]
    pub excluded_dates: Vec<String>,
    #[serde(default)]
    pub wallet_id: Option<String>,
}

impl RawRecord {
    /// A one-off row dated `date`.
    pub fn one_off(id: &str, kind: TransactionKind, amount: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            amount: Some(amount.to_string()),
            date: Some(date.to_string()),
            start_date: None,
            end_date: None,
            day_of_month: None,
            record_type: Some(RecordType::Punctual),
            is_recurring: Some(false),
            materialized: false,
            excluded_dates: Vec::new(),
            wallet_id: None,
        }
    }

    /// A monthly template starting at `start_date`.
    pub fn fixed(id: &str, kind: TransactionKind, amount: &str, start_date: &str) -> Self {
        Self {
            start_date: Some(start_date.to_string()),
            date: None,
            record_type: Some(RecordType::Fixed),
            is_recurring: Some(true),
            ..Self::one_off(id, kind, amount, "")
        }
    }

    pub fn with_day_of_month(mut self, day: i64) -> Self {
        self.day_of_month = Some(day);
        self
    }

    pub fn with_end_date(mut self, end_date: &str) -> Self {
        self.end_date = Some(end_date.to_string());
        self
    }

    pub fn with_wallet(mut self, wallet_id: &str) -> Self {
        self.wallet_id = Some(wallet_id.to_string());
        self
    }

    pub fn with_excluded_date(mut self, date: &str) -> Self {
        self.excluded_dates.push(date.to_string());
        self
    }

    /// Recurring when typed `FIXED` or flagged `isRecurring`.
    pub fn is_recurring(&self) -> bool {
        self.record_type == Some(RecordType::Fixed) || self.is_recurring == Some(true)
    }
}

/// Accepts amounts stored as JSON numbers or strings.
fn deserialize_raw_amount<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
