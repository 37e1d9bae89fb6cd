pub mod analytics;
pub mod export;
pub mod store;
pub mod survey;
pub mod util;

pub use store::{ConfigurationStore, DefaultsSource, SqliteStore, StoreError};
pub use survey::defaults::{resolve_defaults, resolve_from_source};
pub use survey::types::{
    AnonymizationLevel, DefaultConfiguration, FieldError, ScheduleType, SurveyConfiguration,
    TargetType, ValidationReport,
};
pub use survey::validate::validate_configuration;
