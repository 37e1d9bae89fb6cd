use super::types::{FieldError, ScheduleType, SurveyConfiguration, TargetType};

/// A named cross-field rule. `blame` is the UI field path the resulting error
/// attaches to; targeting rules blame the mode selector, the schedule rule
/// blames the missing date itself.
pub struct CrossFieldRule {
    pub name: &'static str,
    pub blame: &'static str,
    pub message: &'static str,
    pub violated: fn(&SurveyConfiguration) -> bool,
}

/// Evaluated in order, independently; no short-circuiting between rules.
pub const CROSS_FIELD_RULES: &[CrossFieldRule] = &[
    CrossFieldRule {
        name: "department_targets_required",
        blame: "targetType",
        message: "Department targeting requires at least one department.",
        violated: |config| {
            config.target_type == TargetType::Department && config.target_departments.is_empty()
        },
    },
    CrossFieldRule {
        name: "manual_targets_required",
        blame: "targetType",
        message: "Manual targeting requires at least one employee.",
        violated: |config| {
            config.target_type == TargetType::Manual && config.target_employees.is_empty()
        },
    },
    CrossFieldRule {
        name: "scheduled_start_date_required",
        blame: "startDate",
        message: "A start date is required for a scheduled survey.",
        violated: |config| {
            config.schedule_type == ScheduleType::Scheduled && config.start_date.is_none()
        },
    },
];

pub fn cross_field_errors(config: &SurveyConfiguration) -> Vec<FieldError> {
    CROSS_FIELD_RULES
        .iter()
        .filter(|rule| (rule.violated)(config))
        .map(|rule| FieldError {
            field: rule.blame.to_string(),
            message: rule.message.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::cross_field_errors;
    use crate::survey::defaults::resolve_defaults;
    use crate::survey::types::{ScheduleType, SurveyConfiguration, TargetType};

    fn base() -> SurveyConfiguration {
        let mut config = resolve_defaults(None);
        config.title = "Q1 Pulse".to_string();
        config.themes = vec!["workload".to_string()];
        config
    }

    #[test]
    fn department_mode_with_no_departments_blames_target_type() {
        let mut config = base();
        config.target_type = TargetType::Department;
        config.target_departments = Vec::new();
        let errors = cross_field_errors(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "targetType");
        assert!(!errors.iter().any(|e| e.field == "targetDepartments"));
    }

    #[test]
    fn manual_mode_with_no_employees_blames_target_type() {
        let mut config = base();
        config.target_type = TargetType::Manual;
        config.target_employees = Vec::new();
        let errors = cross_field_errors(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "targetType");
        assert!(!errors.iter().any(|e| e.field == "targetEmployees"));
    }

    #[test]
    fn scheduled_without_start_date_blames_start_date() {
        let mut config = base();
        config.schedule_type = ScheduleType::Scheduled;
        config.start_date = None;
        let errors = cross_field_errors(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "startDate");
    }

    #[test]
    fn all_mode_ignores_target_lists() {
        let mut config = base();
        config.target_type = TargetType::All;
        config.target_departments = Vec::new();
        config.target_employees = Vec::new();
        assert!(cross_field_errors(&config).is_empty());

        config.target_departments = vec!["eng".to_string()];
        config.target_employees = vec!["emp-1".to_string()];
        assert!(cross_field_errors(&config).is_empty());
    }

    #[test]
    fn rules_accumulate_without_short_circuiting() {
        let mut config = base();
        config.target_type = TargetType::Department;
        config.target_departments = Vec::new();
        config.schedule_type = ScheduleType::Scheduled;
        config.start_date = None;
        let errors = cross_field_errors(&config);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "targetType");
        assert_eq!(errors[1].field, "startDate");
    }
}
