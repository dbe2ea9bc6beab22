//! Turns recurring templates into concrete dated occurrences.

use chrono::NaiveDate;

use super::recurrence_model::{LedgerRecord, Occurrence, OccurrenceSource, RecurringDefinition};
use crate::utils::YearMonth;

/// Expands every definition up to `cutoff` (inclusive).
///
/// At most one occurrence is produced per calendar month of
/// `[recurrence_start, min(end_date, cutoff)]`.
pub fn expand(definitions: &[RecurringDefinition], cutoff: NaiveDate) -> Vec<Occurrence> {
    definitions
        .iter()
        .flat_map(|definition| expand_definition(definition, cutoff))
        .collect()
}

/// Expands a single definition up to `cutoff` (inclusive).
pub fn expand_definition(definition: &RecurringDefinition, cutoff: NaiveDate) -> Vec<Occurrence> {
    let start = definition.recurrence_start();
    let end = definition.recurrence_end(cutoff);
    if start > end {
        return Vec::new();
    }

    let target_day = definition.target_day();
    let last_month = YearMonth::of(end);
    let mut month = YearMonth::of(start);
    let mut occurrences = Vec::new();

    loop {
        let date = month.clipped_day(target_day);
        // Boundary months only count when the clipped day lands inside the window.
        if date >= start && date <= end && !definition.excluded_dates.contains(&date) {
            occurrences.push(Occurrence {
                date,
                kind: definition.kind,
                amount: definition.amount,
                source: OccurrenceSource::Recurring(definition.id.clone()),
            });
        }

        if month >= last_month {
            break;
        }
        match month.next() {
            Some(next) => month = next,
            None => break,
        }
    }

    occurrences
}

/// Resolves classified records into occurrences dated on or before `cutoff`.
///
/// Templates are expanded; one-off and materialized rows pass through
/// untouched so pre-expanded data is never counted twice.
pub fn expand_records(records: &[LedgerRecord], cutoff: NaiveDate) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    for record in records {
        match record {
            LedgerRecord::RawTemplate(definition) => {
                occurrences.extend(expand_definition(definition, cutoff));
            }
            LedgerRecord::OneOff(occurrence) | LedgerRecord::Materialized(occurrence) => {
                if occurrence.date <= cutoff {
                    occurrences.push(occurrence.clone());
                }
            }
        }
    }
    occurrences
}
