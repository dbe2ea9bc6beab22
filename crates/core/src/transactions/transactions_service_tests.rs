use super::*;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct MockRepository {
    records: Vec<RawRecord>,
    queries: Mutex<Vec<RecordQuery>>,
    fail: bool,
}

impl MockRepository {
    fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            queries: Mutex::new(Vec::new()),
            fail: false,
        }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for MockRepository {
    async fn list_records(&self, query: &RecordQuery) -> Result<Vec<RawRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(Error::Repository("store offline".to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter(|record| record.kind == query.kind)
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn test_load_occurrences_expands_and_filters_to_range() {
    let repository = Arc::new(MockRepository::new(vec![
        RawRecord::fixed("rent", TransactionKind::Expense, "800", "2024-01-01")
            .with_day_of_month(10),
        RawRecord::one_off("bonus", TransactionKind::Income, "300", "2024-03-03"),
        RawRecord::one_off("old", TransactionKind::Income, "50", "2024-02-03"),
    ]));
    let service = TransactionService::new(repository.clone());

    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
    let mut occurrences = service
        .load_occurrences(range, None, chrono_tz::UTC)
        .await
        .unwrap();
    occurrences.sort_by_key(|o| o.date);

    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0].date, date(2024, 3, 3));
    assert_eq!(occurrences[0].amount, dec!(300));
    assert_eq!(occurrences[1].date, date(2024, 3, 10));
    assert_eq!(occurrences[1].amount, dec!(800));
}

#[tokio::test]
async fn test_load_occurrences_queries_both_kinds_with_wallets() {
    let repository = Arc::new(MockRepository::new(Vec::new()));
    let service = TransactionService::new(repository.clone());
    let wallets = WalletFilter(vec!["w1".to_string()]);

    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 15));
    service
        .load_occurrences(range, Some(&wallets), chrono_tz::UTC)
        .await
        .unwrap();

    let queries = repository.queries.lock().unwrap();
    assert_eq!(queries.len(), 2);
    assert!(queries.iter().any(|q| q.kind == TransactionKind::Income));
    assert!(queries.iter().any(|q| q.kind == TransactionKind::Expense));
    assert!(queries
        .iter()
        .all(|q| q.range == range && q.wallets.as_ref() == Some(&wallets)));
}

#[tokio::test]
async fn test_load_occurrences_propagates_repository_failure() {
    let mut repository = MockRepository::new(Vec::new());
    repository.fail = true;
    let service = TransactionService::new(Arc::new(repository));

    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 31));
    let result = service.load_occurrences(range, None, chrono_tz::UTC).await;
    assert!(matches!(result, Err(Error::Repository(_))));
}

#[tokio::test]
async fn test_empty_range_skips_the_repository() {
    let repository = Arc::new(MockRepository::new(Vec::new()));
    let service = TransactionService::new(repository.clone());

    let range = DateRange::new(date(2024, 3, 2), date(2024, 3, 1));
    let occurrences = service
        .load_occurrences(range, None, chrono_tz::UTC)
        .await
        .unwrap();
    assert!(occurrences.is_empty());
    assert!(repository.queries.lock().unwrap().is_empty());
}
