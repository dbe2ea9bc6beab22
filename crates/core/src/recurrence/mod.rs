//! Recurring definitions and the occurrence expander.

mod recurrence_expander;
mod recurrence_model;

pub use recurrence_expander::{expand, expand_definition, expand_records};
pub use recurrence_model::{LedgerRecord, Occurrence, OccurrenceSource, RecurringDefinition};
