use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// One scored respondent session. `respondent_id` is absent for anonymized
/// surveys; `theme_mentions` carries free text from the conversation, resolved
/// against the theme catalog at aggregation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    #[serde(default)]
    pub respondent_id: Option<String>,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub theme_mentions: Vec<String>,
    pub completed: bool,
    pub submitted_at: String,
}

/// A client-side trust signal (consent dialog viewed, anonymity notice
/// expanded, data policy opened, ...). Kinds are open-ended strings from the
/// UI, counted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustEvent {
    pub event: String,
    pub occurred_at: String,
}
