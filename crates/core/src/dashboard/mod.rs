//! Dashboard orchestration: fetches snapshots and assembles monthly views.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use dashboard_model::{MonthProjection, MonthlyCashFlow, ProjectionRequest};
pub use dashboard_service::BalanceProjectionService;
pub use dashboard_traits::BalanceProjectionServiceTrait;
