//! Cashflow Core - recurring transaction expansion and balance projection.
//!
//! This crate turns recurring income/expense templates and one-off
//! transactions into a per-day ledger, derives the month's balance
//! trajectory and projects its closing balance and daily spending limit.
//! It is storage-agnostic: transactions are read through
//! `TransactionRepositoryTrait`, implemented by the host application.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod ledger;
pub mod projection;
pub mod recurrence;
pub mod settings;
pub mod transactions;
pub mod utils;

pub use dashboard::{BalanceProjectionService, BalanceProjectionServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
