//! Historical sampling, balance projection and the daily limit.

mod daily_limit;
mod history_sampler;
mod projection_calculator;
mod projection_model;

pub use daily_limit::daily_limit;
pub use history_sampler::{historical_avg_net, HistoricalSampler};
pub use projection_calculator::project;
pub use projection_model::{PeriodPosition, Projection, ProjectionPoint, ProjectionStats};

#[cfg(test)]
mod history_sampler_tests;
