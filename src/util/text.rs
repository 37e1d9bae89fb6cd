pub fn normalize_token(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_")
}

/// Flattens free text to a single line suitable for a CSV cell or list label.
pub fn clean_label(text: &str) -> String {
    let stripped = text.replace('\n', " ").replace('\r', " ");
    let compact = stripped.split_whitespace().collect::<Vec<&str>>().join(" ");
    if compact.chars().count() > 200 {
        let head = compact.chars().take(197).collect::<String>();
        format!("{}...", head)
    } else {
        compact
    }
}
