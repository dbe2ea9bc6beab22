//! Converts dirty repository rows into tagged ledger records.

use std::str::FromStr;

use chrono::NaiveDate;
use chrono_tz::Tz;
use log::warn;
use rust_decimal::Decimal;

use super::transactions_model::RawRecord;
use crate::recurrence::{LedgerRecord, Occurrence, OccurrenceSource, RecurringDefinition};
use crate::utils::parse_local_date;

/// Parses a stored amount, falling back to zero when it is missing or unreadable.
pub fn parse_amount_tolerant(raw: Option<&str>, record_id: &str) -> Decimal {
    let value = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => {
            warn!("Record {} has no amount. Counting it as zero.", record_id);
            return Decimal::ZERO;
        }
    };

    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value) {
            Ok(d) => d,
            Err(e_scientific) => {
                warn!(
                    "Failed to parse amount '{}' of record {}: as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    value, record_id, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses an optional date field. `Err(())` means present but malformed.
fn parse_optional_date(raw: Option<&str>, tz: Tz) -> Result<Option<NaiveDate>, ()> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_local_date(value, tz).map(Some).ok_or(()),
    }
}

/// Classifies one row. Returns `None` when the row cannot contribute.
pub fn classify_record(record: &RawRecord, tz: Tz) -> Option<LedgerRecord> {
    let amount = parse_amount_tolerant(record.amount.as_deref(), &record.id);

    if record.is_recurring() && !record.materialized {
        return classify_template(record, amount, tz).map(LedgerRecord::RawTemplate);
    }

    let date = match parse_optional_date(record.date.as_deref(), tz) {
        Ok(Some(date)) => date,
        Ok(None) => {
            warn!("Dropping record {} without a date", record.id);
            return None;
        }
        Err(()) => {
            warn!(
                "Dropping record {} with unreadable date {:?}",
                record.id, record.date
            );
            return None;
        }
    };

    if record.materialized {
        Some(LedgerRecord::Materialized(Occurrence {
            date,
            kind: record.kind,
            amount,
            source: OccurrenceSource::Recurring(record.id.clone()),
        }))
    } else {
        Some(LedgerRecord::OneOff(Occurrence {
            date,
            kind: record.kind,
            amount,
            source: OccurrenceSource::OneOff(record.id.clone()),
        }))
    }
}

fn classify_template(record: &RawRecord, amount: Decimal, tz: Tz) -> Option<RecurringDefinition> {
    let parsed = (
        parse_optional_date(record.start_date.as_deref(), tz),
        parse_optional_date(record.end_date.as_deref(), tz),
        parse_optional_date(record.date.as_deref(), tz),
    );
    let (start_date, end_date, anchor_date) = match parsed {
        (Ok(start), Ok(end), Ok(anchor)) => (start, end, anchor),
        _ => {
            warn!(
                "Dropping recurring record {} with unreadable dates (start {:?}, end {:?}, date {:?})",
                record.id, record.start_date, record.end_date, record.date
            );
            return None;
        }
    };

    let day_of_month = record
        .day_of_month
        .filter(|day| *day > 0)
        .and_then(|day| u32::try_from(day).ok());

    let excluded_dates = record
        .excluded_dates
        .iter()
        .filter_map(|raw| parse_local_date(raw, tz))
        .collect();

    Some(RecurringDefinition {
        id: record.id.clone(),
        kind: record.kind,
        amount,
        start_date,
        end_date,
        anchor_date,
        day_of_month,
        excluded_dates,
    })
}

/// Classifies a batch of rows, silently skipping the ones that cannot contribute.
pub fn classify_records(records: &[RawRecord], tz: Tz) -> Vec<LedgerRecord> {
    records
        .iter()
        .filter_map(|record| classify_record(record, tz))
        .collect()
}
