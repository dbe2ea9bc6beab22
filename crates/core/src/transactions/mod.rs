//! Transaction store boundary: raw rows, queries, and the repository seam.

mod record_classifier;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use record_classifier::{classify_record, classify_records, parse_amount_tolerant};
pub use transactions_model::{
    DateRange, RawRecord, RecordQuery, RecordType, TransactionKind, WalletFilter,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};


#[cfg(test)]
mod transactions_service_tests;
