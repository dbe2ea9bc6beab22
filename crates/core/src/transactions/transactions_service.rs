use std::sync::Arc;

use async_trait::async_trait;
use chrono_tz::Tz;
use log::debug;

use super::record_classifier::classify_records;
use super::transactions_model::{DateRange, RecordQuery, TransactionKind, WalletFilter};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::recurrence::{expand_records, Occurrence};

/// Loads period snapshots from the repository and resolves them into occurrences.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn query(kind: TransactionKind, range: DateRange, wallets: Option<&WalletFilter>) -> RecordQuery {
        RecordQuery {
            kind,
            range,
            wallets: wallets.cloned(),
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn load_occurrences(
        &self,
        range: DateRange,
        wallets: Option<&WalletFilter>,
        tz: Tz,
    ) -> Result<Vec<Occurrence>> {
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let income_query = Self::query(TransactionKind::Income, range, wallets);
        let expense_query = Self::query(TransactionKind::Expense, range, wallets);
        let (incomes, expenses) = futures::try_join!(
            self.repository.list_records(&income_query),
            self.repository.list_records(&expense_query),
        )?;

        debug!(
            "Loaded {} income and {} expense rows for {} to {}",
            incomes.len(),
            expenses.len(),
            range.start,
            range.end
        );

        let mut records = classify_records(&incomes, tz);
        records.extend(classify_records(&expenses, tz));

        let occurrences = expand_records(&records, range.end)
            .into_iter()
            .filter(|occurrence| range.contains(occurrence.date))
            .collect();
        Ok(occurrences)
    }
}
