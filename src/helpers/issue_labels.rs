/// Icon shown next to an issue type in the table.
pub fn issue_icon(issue_type: &str) -> &'static str {
    match issue_type {
        "Invalid Date Range" => "📅",
        "Future Start Date" => "🔮",
        "Missing Date" => "❓",
        "Excessive Duration" => "⏰",
        _ => "⚠️",
    }
}

/// Shortens `text` to at most `width` characters, ending with an ellipsis
/// when something was cut.
pub fn truncate(text: &str, width: usize) -> String {
    if width == 0 || text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_types_get_the_warning_icon() {
        assert_eq!(issue_icon("Missing Date"), "❓");
        assert_eq!(issue_icon("Missing Project Name"), "⚠️");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Projekt Übersicht", 8), "Projekt…");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("anything", 0), "anything");
    }
}
