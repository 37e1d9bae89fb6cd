use crate::store::DefaultsSource;

use super::types::{
    AnonymizationLevel, DefaultConfiguration, ScheduleType, SurveyConfiguration, TargetType,
};

pub const DEFAULT_CONSENT_MESSAGE: &str = "Your responses help us improve how we work together. \
Participation is voluntary and you can stop at any time.";
pub const DEFAULT_FIRST_MESSAGE: &str =
    "Hi! Thanks for taking a moment to share how things are going. What's on your mind?";
pub const DEFAULT_RETENTION_DAYS: u32 = 60;
pub const DEFAULT_REMINDER_FREQUENCY_DAYS: u32 = 7;

/// Produces a complete starting draft. Stored organization defaults seed the
/// consent, anonymization, opening-message, and retention fields; everything
/// else takes the fixed literals. Never fails.
pub fn resolve_defaults(stored: Option<DefaultConfiguration>) -> SurveyConfiguration {
    let (consent_message, anonymization_level, first_message, data_retention_days) = match stored {
        Some(d) => (
            d.consent_message,
            d.anonymization_level,
            d.first_message,
            d.data_retention_days,
        ),
        None => (
            DEFAULT_CONSENT_MESSAGE.to_string(),
            AnonymizationLevel::Identified,
            DEFAULT_FIRST_MESSAGE.to_string(),
            DEFAULT_RETENTION_DAYS,
        ),
    };
    SurveyConfiguration {
        title: String::new(),
        description: None,
        first_message,
        themes: Vec::new(),
        target_type: TargetType::All,
        target_departments: Vec::new(),
        target_employees: Vec::new(),
        schedule_type: ScheduleType::Immediate,
        start_date: None,
        end_date: None,
        reminder_frequency_days: Some(DEFAULT_REMINDER_FREQUENCY_DAYS),
        anonymization_level,
        consent_message,
        data_retention_days,
    }
}

/// Resolves a starting draft from a defaults source. A failed fetch is treated
/// the same as "not yet configured": the literals apply and no error surfaces.
pub fn resolve_from_source(source: &dyn DefaultsSource) -> SurveyConfiguration {
    resolve_defaults(source.fetch_defaults().ok().flatten())
}
