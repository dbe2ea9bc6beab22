//! Balance projection service implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::try_join_all;
use log::{debug, error};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use super::dashboard_model::{MonthProjection, MonthlyCashFlow, ProjectionRequest};
use super::dashboard_traits::BalanceProjectionServiceTrait;
use crate::errors::{Error, Result};
use crate::ledger::{aggregate, aggregate_within, build_trajectory, opening_balance};
use crate::projection::{daily_limit, project, HistoricalSampler, PeriodPosition};
use crate::settings::ProjectionSettings;
use crate::transactions::{
    DateRange, TransactionRepositoryTrait, TransactionService, TransactionServiceTrait,
};
use crate::utils::YearMonth;

/// Service assembling the dashboard's monthly balance views.
pub struct BalanceProjectionService {
    settings: Arc<RwLock<ProjectionSettings>>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
    history_sampler: HistoricalSampler,
}

impl BalanceProjectionService {
    /// Creates a service reading transactions through `repository`.
    pub fn new(
        settings: Arc<RwLock<ProjectionSettings>>,
        repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        let transaction_service: Arc<dyn TransactionServiceTrait> =
            Arc::new(TransactionService::new(repository));
        Self::with_transaction_service(settings, transaction_service)
    }

    pub fn with_transaction_service(
        settings: Arc<RwLock<ProjectionSettings>>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        Self {
            settings,
            history_sampler: HistoricalSampler::new(transaction_service.clone()),
            transaction_service,
        }
    }

    fn settings_snapshot(&self) -> Result<ProjectionSettings> {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| Error::Unexpected("Projection settings lock poisoned".to_string()))
    }

    /// Last day of the period whose activity counts as real.
    fn effective_end(period: YearMonth, today: NaiveDate) -> NaiveDate {
        if PeriodPosition::of(period, today).is_current() {
            today
        } else {
            period.last_day()
        }
    }
}

#[async_trait]
impl BalanceProjectionServiceTrait for BalanceProjectionService {
    async fn get_month_projection(&self, request: &ProjectionRequest) -> Result<MonthProjection> {
        let period = request.period()?;
        let settings = self.settings_snapshot()?;
        let tz = settings.tz()?;
        let today = request.today;
        let wallets = request.wallets.as_ref();

        debug!(
            "Projecting {} as of {} (history {} months, recent window {})",
            period, today, settings.history_months, settings.recent_window_points
        );

        // Empty for a future month.
        let current_range = DateRange::new(period.first_day(), period.last_day().min(today));
        let opening_range = match period.first_day().pred_opt() {
            Some(day_before) => DateRange::through(day_before.min(today)),
            None => DateRange::new(period.first_day(), NaiveDate::MIN),
        };

        let (current, history, samples) = futures::join!(
            self.transaction_service
                .load_occurrences(current_range, wallets, tz),
            self.transaction_service
                .load_occurrences(opening_range, wallets, tz),
            self.history_sampler
                .sample_historical_net(settings.history_months, period, wallets, tz),
        );

        let current = current.map_err(|e| {
            error!("Failed to load transactions for {}: {}", period, e);
            e
        })?;
        let history = history.map_err(|e| {
            error!("Failed to load history before {}: {}", period, e);
            e
        })?;

        let opening = opening_balance(&history, period.first_day());
        let ledger = aggregate_within(&current, current_range);
        let trajectory = build_trajectory(&ledger, opening);
        let projection = project(
            &trajectory,
            period,
            today,
            &samples,
            settings.recent_window_points,
        );
        let totals = ledger.totals();
        let limit = daily_limit(totals.net, today, period);

        debug!(
            "Projection for {} done: opening {}, net {}, daily limit {}",
            period, opening, totals.net, limit
        );

        Ok(MonthProjection {
            period,
            today,
            opening_balance: opening,
            daily_ledger: ledger,
            daily_balance_series: trajectory.points,
            projection_series: projection.series,
            stats: projection.stats,
            daily_limit: limit,
            totals,
        })
    }

    async fn get_accumulated_balance(&self, request: &ProjectionRequest) -> Result<Decimal> {
        let period = request.period()?;
        let tz = self.settings_snapshot()?.tz()?;
        let end = Self::effective_end(period, request.today);

        debug!("Accumulating balance for {} through {}", period, end);

        let occurrences = self
            .transaction_service
            .load_occurrences(DateRange::through(end), request.wallets.as_ref(), tz)
            .await?;
        let balance = build_trajectory(&aggregate(&occurrences), Decimal::ZERO).last_balance();

        debug!("Accumulated balance for {}: {}", period, balance);
        Ok(balance)
    }

    async fn get_monthly_overview(
        &self,
        request: &ProjectionRequest,
    ) -> Result<Vec<MonthlyCashFlow>> {
        let reference = request.period()?;
        let settings = self.settings_snapshot()?;
        let tz = settings.tz()?;
        let wallets = request.wallets.as_ref();

        let mut months: Vec<YearMonth> = (0..settings.overview_months)
            .map_while(|offset| reference.months_back(offset))
            .collect();
        months.reverse();

        debug!(
            "Building {}-month overview ending at {}",
            months.len(),
            reference
        );

        let futures = months.iter().map(|month| {
            let range = DateRange::new(
                month.first_day(),
                Self::effective_end(*month, request.today),
            );
            self.transaction_service.load_occurrences(range, wallets, tz)
        });
        let results = try_join_all(futures).await.map_err(|e| {
            error!("Failed to build overview ending at {}: {}", reference, e);
            e
        })?;

        Ok(months
            .into_iter()
            .zip(results)
            .map(|(month, occurrences)| MonthlyCashFlow::new(month, aggregate(&occurrences).totals()))
            .collect())
    }

    fn get_settings(&self) -> Result<ProjectionSettings> {
        self.settings_snapshot()
    }

    fn update_settings(&self, settings: ProjectionSettings) -> Result<()> {
        settings.validate()?;
        let mut guard = self
            .settings
            .write()
            .map_err(|_| Error::Unexpected("Projection settings lock poisoned".to_string()))?;
        *guard = settings;
        Ok(())
    }
}
