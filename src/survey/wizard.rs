use serde::{Deserialize, Serialize};

use super::types::{FieldError, ValidationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Basics,
    Targeting,
    Schedule,
    Privacy,
}

/// Field paths owned by each wizard step. Cross-field errors count against the
/// step owning their blame field.
const STEP_FIELDS: &[(&str, WizardStep)] = &[
    ("title", WizardStep::Basics),
    ("description", WizardStep::Basics),
    ("firstMessage", WizardStep::Basics),
    ("themes", WizardStep::Basics),
    ("targetType", WizardStep::Targeting),
    ("targetDepartments", WizardStep::Targeting),
    ("targetEmployees", WizardStep::Targeting),
    ("scheduleType", WizardStep::Schedule),
    ("startDate", WizardStep::Schedule),
    ("endDate", WizardStep::Schedule),
    ("reminderFrequencyDays", WizardStep::Schedule),
    ("anonymizationLevel", WizardStep::Privacy),
    ("consentMessage", WizardStep::Privacy),
    ("dataRetentionDays", WizardStep::Privacy),
];

pub fn step_for_field(field: &str) -> Option<WizardStep> {
    STEP_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, step)| *step)
}

pub fn errors_for_step<'a>(report: &'a ValidationReport, step: WizardStep) -> Vec<&'a FieldError> {
    report
        .errors
        .iter()
        .filter(|e| step_for_field(&e.field) == Some(step))
        .collect()
}

pub fn can_advance(report: &ValidationReport, step: WizardStep) -> bool {
    errors_for_step(report, step).is_empty()
}
