use super::types::{FieldError, SurveyConfiguration};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const RETENTION_CHOICES: &[u32] = &[30, 60, 90];

/// Per-field checks, run in field-declaration order. Non-emptiness checks trim
/// first (whitespace-only text counts as empty); length limits count raw code
/// points.
pub fn field_errors(config: &SurveyConfiguration) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if config.title.trim().is_empty() {
        errors.push(err("title", "Title is required."));
    } else if config.title.chars().count() > TITLE_MAX_CHARS {
        errors.push(err("title", "Title must be 100 characters or fewer."));
    }

    if let Some(description) = &config.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(err("description", "Description must be 500 characters or fewer."));
        }
    }

    if config.first_message.trim().is_empty() {
        errors.push(err("firstMessage", "An opening message is required."));
    }

    if config.themes.is_empty() {
        errors.push(err("themes", "Select at least one theme."));
    }

    if let Some(days) = config.reminder_frequency_days {
        if days == 0 {
            errors.push(err(
                "reminderFrequencyDays",
                "Reminder frequency must be at least one day.",
            ));
        }
    }

    if config.consent_message.trim().is_empty() {
        errors.push(err("consentMessage", "A consent message is required."));
    }

    if !RETENTION_CHOICES.contains(&config.data_retention_days) {
        errors.push(err(
            "dataRetentionDays",
            "Data retention must be 30, 60, or 90 days.",
        ));
    }

    errors
}

fn err(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}
