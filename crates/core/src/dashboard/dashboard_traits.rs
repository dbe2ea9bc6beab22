use async_trait::async_trait;
use rust_decimal::Decimal;

use super::dashboard_model::{MonthProjection, MonthlyCashFlow, ProjectionRequest};
use crate::errors::Result;
use crate::settings::ProjectionSettings;

/// Trait defining the contract for the balance projection service.
#[async_trait]
pub trait BalanceProjectionServiceTrait: Send + Sync {
    /// Builds the ledger, balance trajectory, projection and daily limit of
    /// the requested month.
    async fn get_month_projection(&self, request: &ProjectionRequest) -> Result<MonthProjection>;

    /// Cumulative net of all history up to the month's effective end.
    async fn get_accumulated_balance(&self, request: &ProjectionRequest) -> Result<Decimal>;

    /// Monthly income/expense/net for the configured number of months ending
    /// at the requested month, oldest first.
    async fn get_monthly_overview(
        &self,
        request: &ProjectionRequest,
    ) -> Result<Vec<MonthlyCashFlow>>;

    fn get_settings(&self) -> Result<ProjectionSettings>;

    /// Validates and replaces the engine settings.
    fn update_settings(&self, settings: ProjectionSettings) -> Result<()>;
}
