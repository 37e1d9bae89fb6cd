use thiserror::Error;

use crate::survey::types::{DefaultConfiguration, SurveyConfiguration};

pub mod sqlite;

pub use sqlite::{SqliteStore, SurveySummary};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("configuration failed validation with {0} error(s)")]
    InvalidConfiguration(usize),
}

/// One-shot read of the per-organization defaults. `Ok(None)` means "not yet
/// configured" and is not an error.
pub trait DefaultsSource {
    fn fetch_defaults(&self) -> Result<Option<DefaultConfiguration>, StoreError>;
}

/// Accepts a validated configuration and assigns its durable identifier.
pub trait ConfigurationStore {
    fn persist_configuration(&self, config: &SurveyConfiguration) -> Result<String, StoreError>;
}
