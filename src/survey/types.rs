use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    All,
    Department,
    Manual,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Department => "department",
            Self::Manual => "manual",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "department" => Some(Self::Department),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Immediate,
    Scheduled,
}

impl ScheduleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Scheduled => "scheduled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "immediate" => Some(Self::Immediate),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnonymizationLevel {
    Identified,
    Anonymous,
}

impl AnonymizationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identified => "identified",
            Self::Anonymous => "anonymous",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "identified" => Some(Self::Identified),
            "anonymous" => Some(Self::Anonymous),
            _ => None,
        }
    }
}

/// The draft a wizard session owns until hand-off to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyConfiguration {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub first_message: String,
    pub themes: Vec<String>,
    pub target_type: TargetType,
    #[serde(default)]
    pub target_departments: Vec<String>,
    #[serde(default)]
    pub target_employees: Vec<String>,
    pub schedule_type: ScheduleType,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub reminder_frequency_days: Option<u32>,
    pub anonymization_level: AnonymizationLevel,
    pub consent_message: String,
    pub data_retention_days: u32,
}

/// Per-organization seed values; absent until HR configures them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfiguration {
    pub consent_message: String,
    pub anonymization_level: AnonymizationLevel,
    pub first_message: String,
    pub data_retention_days: u32,
}

/// A single violation, keyed by the UI field path it binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::{AnonymizationLevel, ScheduleType, TargetType};

    #[test]
    fn enum_round_trips_through_str() {
        for t in [TargetType::All, TargetType::Department, TargetType::Manual] {
            assert_eq!(TargetType::parse(t.as_str()), Some(t));
        }
        for s in [ScheduleType::Immediate, ScheduleType::Scheduled] {
            assert_eq!(ScheduleType::parse(s.as_str()), Some(s));
        }
        for a in [AnonymizationLevel::Identified, AnonymizationLevel::Anonymous] {
            assert_eq!(AnonymizationLevel::parse(a.as_str()), Some(a));
        }
        assert_eq!(TargetType::parse("everyone"), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(super::FieldError {
            field: "targetType".to_string(),
            message: "msg".to_string(),
        })
        .expect("serialize");
        assert_eq!(json["field"], "targetType");
        let level = serde_json::to_value(AnonymizationLevel::Anonymous).expect("serialize");
        assert_eq!(level, "anonymous");
    }
}
