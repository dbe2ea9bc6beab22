//! Historical Average Sampler.

use std::sync::Arc;

use chrono_tz::Tz;
use futures::future::join_all;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::ledger::aggregate;
use crate::transactions::{DateRange, TransactionServiceTrait, WalletFilter};
use crate::utils::YearMonth;

/// Samples the net cash flow of the months preceding a reference month.
pub struct HistoricalSampler {
    transaction_service: Arc<dyn TransactionServiceTrait>,
}

impl HistoricalSampler {
    pub fn new(transaction_service: Arc<dyn TransactionServiceTrait>) -> Self {
        Self {
            transaction_service,
        }
    }

    /// Net (income minus expense) of each of the `months_back` months before
    /// `reference`, most recent first.
    ///
    /// Months are fetched concurrently. A month whose fetch fails is skipped
    /// rather than counted as zero.
    pub async fn sample_historical_net(
        &self,
        months_back: u32,
        reference: YearMonth,
        wallets: Option<&WalletFilter>,
        tz: Tz,
    ) -> Vec<Decimal> {
        let months: Vec<YearMonth> = (1..=months_back)
            .map_while(|offset| reference.months_back(offset))
            .collect();

        let futures = months.iter().map(|month| {
            let range = DateRange::new(month.first_day(), month.last_day());
            self.transaction_service.load_occurrences(range, wallets, tz)
        });
        let results = join_all(futures).await;

        let mut samples = Vec::with_capacity(months.len());
        for (month, result) in months.iter().zip(results) {
            match result {
                Ok(occurrences) => samples.push(aggregate(&occurrences).totals().net),
                Err(e) => {
                    warn!(
                        "Skipping historical month {} for reference {}: {}",
                        month, reference, e
                    );
                }
            }
        }

        debug!(
            "Sampled {}/{} historical months before {}",
            samples.len(),
            months.len(),
            reference
        );
        samples
    }
}

/// Mean of the samples, or the month-to-date net when there are none.
pub fn historical_avg_net(samples: &[Decimal], avg_per_day: Decimal, days_elapsed: u32) -> Decimal {
    if samples.is_empty() {
        return avg_per_day * Decimal::from(days_elapsed);
    }
    let sum: Decimal = samples.iter().copied().sum();
    sum / Decimal::from(samples.len())
}
