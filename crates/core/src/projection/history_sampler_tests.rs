use super::*;
use crate::errors::{Error, Result};
use crate::recurrence::{Occurrence, OccurrenceSource};
use crate::transactions::{DateRange, TransactionKind, TransactionServiceTrait, WalletFilter};
use crate::utils::YearMonth;
use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

/// Every month nets +100, except months listed in `failing` whose fetch fails.
struct MockTransactionService {
    failing: Vec<YearMonth>,
    requested: Mutex<Vec<DateRange>>,
}

impl MockTransactionService {
    fn new(failing: Vec<YearMonth>) -> Self {
        Self {
            failing,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for MockTransactionService {
    async fn load_occurrences(
        &self,
        range: DateRange,
        _wallets: Option<&WalletFilter>,
        _tz: Tz,
    ) -> Result<Vec<Occurrence>> {
        self.requested.lock().unwrap().push(range);
        if self.failing.contains(&YearMonth::of(range.start)) {
            return Err(Error::Repository("timeout".to_string()));
        }
        Ok(vec![
            Occurrence {
                date: range.start,
                kind: TransactionKind::Income,
                amount: dec!(150),
                source: OccurrenceSource::OneOff("salary".to_string()),
            },
            Occurrence {
                date: range.end,
                kind: TransactionKind::Expense,
                amount: dec!(50),
                source: OccurrenceSource::OneOff("rent".to_string()),
            },
        ])
    }
}

fn month(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

#[tokio::test]
async fn test_samples_full_preceding_months() {
    let service = Arc::new(MockTransactionService::new(Vec::new()));
    let sampler = HistoricalSampler::new(service.clone());

    let samples = sampler
        .sample_historical_net(3, month(2024, 2), None, chrono_tz::UTC)
        .await;
    assert_eq!(samples, vec![dec!(100), dec!(100), dec!(100)]);

    let requested = service.requested.lock().unwrap();
    assert_eq!(requested.len(), 3);
    assert!(requested.contains(&DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )));
    assert!(requested.contains(&DateRange::new(
        NaiveDate::from_ymd_opt(2023, 11, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 11, 30).unwrap(),
    )));
}

#[tokio::test]
async fn test_failed_month_is_skipped_not_zeroed() {
    let service = Arc::new(MockTransactionService::new(vec![month(2024, 1)]));
    let sampler = HistoricalSampler::new(service);

    let samples = sampler
        .sample_historical_net(3, month(2024, 3), None, chrono_tz::UTC)
        .await;
    assert_eq!(samples, vec![dec!(100), dec!(100)]);
}

#[tokio::test]
async fn test_all_months_failing_yields_no_samples() {
    let service = Arc::new(MockTransactionService::new(vec![
        month(2024, 1),
        month(2024, 2),
    ]));
    let sampler = HistoricalSampler::new(service);

    let samples = sampler
        .sample_historical_net(2, month(2024, 3), None, chrono_tz::UTC)
        .await;
    assert!(samples.is_empty());
    assert_eq!(historical_avg_net(&samples, dec!(20), 5), dec!(100));
}

#[tokio::test]
async fn test_zero_months_back_fetches_nothing() {
    let service = Arc::new(MockTransactionService::new(Vec::new()));
    let sampler = HistoricalSampler::new(service.clone());

    let samples = sampler
        .sample_historical_net(0, month(2024, 3), None, chrono_tz::UTC)
        .await;
    assert!(samples.is_empty());
    assert!(service.requested.lock().unwrap().is_empty());
}
