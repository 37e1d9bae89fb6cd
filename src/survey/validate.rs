use super::field_rules::field_errors;
use super::rules::cross_field_errors;
use super::types::{SurveyConfiguration, ValidationReport};

/// Runs the field pass, then the cross-field pass, and concatenates both error
/// sequences without deduplication. Total: always returns a report.
pub fn validate_configuration(config: &SurveyConfiguration) -> ValidationReport {
    let mut errors = field_errors(config);
    errors.extend(cross_field_errors(config));
    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}
