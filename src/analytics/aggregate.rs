use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

use crate::survey::themes::{theme_label, THEME_CATALOG};
use crate::util::text::normalize_token;

use super::types::{Sentiment, SurveyResponse, TrustEvent};

const THEME_RESOLVE_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationSummary {
    pub invited: usize,
    pub started: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// `theme` is a catalog id when the mention resolved, otherwise the normalized
/// raw token; `label` is present only for catalog themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCount {
    pub theme: String,
    pub label: Option<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustEventCount {
    pub event: String,
    pub count: usize,
}

pub fn participation(invited: usize, responses: &[SurveyResponse]) -> ParticipationSummary {
    let started = responses.len();
    let completed = responses.iter().filter(|r| r.completed).count();
    let completion_rate = if invited == 0 {
        0.0
    } else {
        completed as f64 / invited as f64
    };
    ParticipationSummary {
        invited,
        started,
        completed,
        completion_rate,
    }
}

pub fn sentiment_breakdown(responses: &[SurveyResponse]) -> SentimentBreakdown {
    let mut out = SentimentBreakdown {
        positive: 0,
        neutral: 0,
        negative: 0,
    };
    for r in responses {
        match r.sentiment {
            Sentiment::Positive => out.positive += 1,
            Sentiment::Neutral => out.neutral += 1,
            Sentiment::Negative => out.negative += 1,
        }
    }
    out
}

/// Resolves a free-text mention to a catalog theme id. Exact normalized match
/// on id or label wins; otherwise the best fuzzy score above the threshold.
pub fn resolve_theme_mention(mention: &str) -> Option<&'static str> {
    let norm = normalize_token(mention);
    if norm.is_empty() {
        return None;
    }
    let mut best: Option<(&'static str, f64)> = None;
    for theme in THEME_CATALOG {
        let id_norm = normalize_token(theme.id);
        let label_norm = normalize_token(theme.label);
        if norm == id_norm || norm == label_norm {
            return Some(theme.id);
        }
        let score = normalized_levenshtein(&norm, &id_norm)
            .max(normalized_levenshtein(&norm, &label_norm));
        if best.map_or(true, |(_, b)| score > b) {
            best = Some((theme.id, score));
        }
    }
    match best {
        Some((id, score)) if score >= THEME_RESOLVE_THRESHOLD => Some(id),
        _ => None,
    }
}

/// Counts theme mentions across responses. Sorted by count descending, then
/// theme id ascending, so the dashboard ordering is reproducible.
pub fn theme_counts(responses: &[SurveyResponse]) -> Vec<ThemeCount> {
    let mut counts: Vec<ThemeCount> = Vec::new();
    for response in responses {
        for mention in &response.theme_mentions {
            let (theme, label) = match resolve_theme_mention(mention) {
                Some(id) => (id.to_string(), theme_label(id).map(|l| l.to_string())),
                None => {
                    let norm = normalize_token(mention);
                    if norm.is_empty() {
                        continue;
                    }
                    (norm, None)
                }
            };
            if let Some(existing) = counts.iter_mut().find(|c| c.theme == theme) {
                existing.count += 1;
            } else {
                counts.push(ThemeCount {
                    theme,
                    label,
                    count: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.theme.cmp(&b.theme)));
    counts
}

/// Counts trust events per kind, in first-seen order.
pub fn trust_event_counts(events: &[TrustEvent]) -> Vec<TrustEventCount> {
    let mut counts: Vec<TrustEventCount> = Vec::new();
    for event in events {
        if let Some(existing) = counts.iter_mut().find(|c| c.event == event.event) {
            existing.count += 1;
        } else {
            counts.push(TrustEventCount {
                event: event.event.clone(),
                count: 1,
            });
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::{
        participation, resolve_theme_mention, sentiment_breakdown, theme_counts,
        trust_event_counts,
    };
    use crate::analytics::types::{Sentiment, SurveyResponse, TrustEvent};

    fn response(sentiment: Sentiment, mentions: &[&str], completed: bool) -> SurveyResponse {
        SurveyResponse {
            respondent_id: None,
            sentiment,
            theme_mentions: mentions.iter().map(|m| m.to_string()).collect(),
            completed,
            submitted_at: "2026-01-15T09:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn participation_counts_and_rate() {
        let responses = vec![
            response(Sentiment::Positive, &[], true),
            response(Sentiment::Neutral, &[], true),
            response(Sentiment::Negative, &[], false),
        ];
        let summary = participation(10, &responses);
        assert_eq!(summary.invited, 10);
        assert_eq!(summary.started, 3);
        assert_eq!(summary.completed, 2);
        assert!((summary.completion_rate - 0.2).abs() < 1e-9);
    }

    #[test]
    fn zero_invited_yields_zero_rate() {
        assert_eq!(participation(0, &[]).completion_rate, 0.0);
    }

    #[test]
    fn sentiment_counts_each_bucket() {
        let responses = vec![
            response(Sentiment::Positive, &[], true),
            response(Sentiment::Positive, &[], true),
            response(Sentiment::Negative, &[], true),
        ];
        let breakdown = sentiment_breakdown(&responses);
        assert_eq!(breakdown.positive, 2);
        assert_eq!(breakdown.neutral, 0);
        assert_eq!(breakdown.negative, 1);
    }

    #[test]
    fn mentions_resolve_against_the_catalog() {
        assert_eq!(
            resolve_theme_mention("work life balance"),
            Some("work-life-balance")
        );
        assert_eq!(
            resolve_theme_mention("Work-Life Balance"),
            Some("work-life-balance")
        );
        assert_eq!(resolve_theme_mention("recognition"), Some("recognition"));
        assert_eq!(resolve_theme_mention("quarterly budget"), None);
        assert_eq!(resolve_theme_mention("   "), None);
    }

    #[test]
    fn theme_counts_merge_resolved_mentions_and_keep_raw_tokens() {
        let responses = vec![
            response(Sentiment::Neutral, &["work life balance", "Workload"], true),
            response(Sentiment::Neutral, &["Work-Life Balance", "on-call"], true),
        ];
        let counts = theme_counts(&responses);
        assert_eq!(counts[0].theme, "work-life-balance");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[0].label.as_deref(), Some("Work-Life Balance"));
        assert!(counts
            .iter()
            .any(|c| c.theme == "on_call" && c.label.is_none()));
    }

    #[test]
    fn trust_events_count_in_first_seen_order() {
        let events = vec![
            TrustEvent {
                event: "consentViewed".to_string(),
                occurred_at: "t1".to_string(),
            },
            TrustEvent {
                event: "anonymityChecked".to_string(),
                occurred_at: "t2".to_string(),
            },
            TrustEvent {
                event: "consentViewed".to_string(),
                occurred_at: "t3".to_string(),
            },
        ];
        let counts = trust_event_counts(&events);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].event, "consentViewed");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].event, "anonymityChecked");

        let again = trust_event_counts(&events);
        assert_eq!(counts, again);
    }
}
