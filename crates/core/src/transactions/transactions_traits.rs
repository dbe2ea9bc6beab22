//! Transaction repository and loading service traits.

use async_trait::async_trait;
use chrono_tz::Tz;

use super::transactions_model::{DateRange, RawRecord, RecordQuery, WalletFilter};
use crate::errors::Result;
use crate::recurrence::Occurrence;

/// Read access to the transaction store.
///
/// For a bounded query an implementation may return `FIXED` rows already
/// expanded for the range; it must then set `materialized` on them. Raw
/// templates are returned with `materialized == false` and are expanded by
/// the engine.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Lists one-off rows dated within `query.range` together with the
    /// recurring rows relevant to it.
    async fn list_records(&self, query: &RecordQuery) -> Result<Vec<RawRecord>>;
}

/// Trait defining the contract for loading a period's occurrences.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Fetches incomes and expenses for `range`, expands raw templates up to
    /// the range end and keeps only occurrences dated inside the range.
    async fn load_occurrences(
        &self,
        range: DateRange,
        wallets: Option<&WalletFilter>,
        tz: Tz,
    ) -> Result<Vec<Occurrence>>;
}
