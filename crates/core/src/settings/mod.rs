//! Engine settings: history depth, recent window size, time zone.

mod settings_model;

pub use settings_model::ProjectionSettings;

#[cfg(test)]
mod settings_model_tests;
