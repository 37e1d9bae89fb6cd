use crate::analytics::aggregate::{ThemeCount, TrustEventCount};
use crate::analytics::types::SurveyResponse;
use crate::util::text::clean_label;

/// Quotes a field when it contains a comma, quote, or line break; embedded
/// quotes are doubled.
pub fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn render_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(
        &header
            .iter()
            .map(|h| csv_escape(h))
            .collect::<Vec<String>>()
            .join(","),
    );
    out.push('\n');
    for row in rows {
        out.push_str(
            &row.iter()
                .map(|cell| csv_escape(cell))
                .collect::<Vec<String>>()
                .join(","),
        );
        out.push('\n');
    }
    out
}

pub fn theme_counts_csv(counts: &[ThemeCount]) -> String {
    let rows = counts
        .iter()
        .map(|c| {
            vec![
                c.theme.clone(),
                c.label.clone().unwrap_or_default(),
                c.count.to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    render_csv(&["theme", "label", "count"], &rows)
}

pub fn trust_event_counts_csv(counts: &[TrustEventCount]) -> String {
    let rows = counts
        .iter()
        .map(|c| vec![c.event.clone(), c.count.to_string()])
        .collect::<Vec<Vec<String>>>();
    render_csv(&["event", "count"], &rows)
}

pub fn responses_csv(responses: &[SurveyResponse]) -> String {
    let rows = responses
        .iter()
        .map(|r| {
            vec![
                r.respondent_id.clone().unwrap_or_default(),
                r.sentiment.as_str().to_string(),
                clean_label(&r.theme_mentions.join("; ")),
                if r.completed { "yes" } else { "no" }.to_string(),
                r.submitted_at.clone(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    render_csv(
        &[
            "respondentId",
            "sentiment",
            "themeMentions",
            "completed",
            "submittedAt",
        ],
        &rows,
    )
}

#[cfg(test)]
mod tests {
    use super::{csv_escape, render_csv, responses_csv, theme_counts_csv};
    use crate::analytics::aggregate::ThemeCount;
    use crate::analytics::types::{Sentiment, SurveyResponse};

    #[test]
    fn escapes_commas_quotes_and_newlines() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn renders_header_then_rows() {
        let csv = render_csv(
            &["a", "b"],
            &[vec!["1".to_string(), "x,y".to_string()]],
        );
        assert_eq!(csv, "a,b\n1,\"x,y\"\n");
    }

    #[test]
    fn theme_counts_header_is_fixed() {
        let csv = theme_counts_csv(&[ThemeCount {
            theme: "workload".to_string(),
            label: Some("Workload".to_string()),
            count: 3,
        }]);
        assert!(csv.starts_with("theme,label,count\n"));
        assert!(csv.contains("workload,Workload,3\n"));
    }

    #[test]
    fn responses_export_flattens_mentions() {
        let csv = responses_csv(&[SurveyResponse {
            respondent_id: Some("emp-1".to_string()),
            sentiment: Sentiment::Positive,
            theme_mentions: vec!["workload".to_string(), "on\ncall".to_string()],
            completed: true,
            submitted_at: "2026-01-15T09:00:00+00:00".to_string(),
        }]);
        assert!(csv.starts_with("respondentId,sentiment,themeMentions,completed,submittedAt\n"));
        assert!(csv.contains("emp-1,positive,workload; on call,yes,"));
    }
}
