use terminal_size::{terminal_size, Width};
use crate::config::constants::DEFAULT_TABLE_WIDTH;
use crate::enums::severity_filter::SeverityFilter;
use crate::helpers::issue_labels::{issue_icon, truncate};
use crate::structs::query_criteria::QueryCriteria;
use crate::structs::results_summary::ResultsSummary;
use crate::structs::visible_issue::VisibleIssue;

const ROW_WIDTH: usize = 6;
const PROJECT_WIDTH: usize = 22;
const TYPE_WIDTH: usize = 24;
const DATES_WIDTH: usize = 24;
const SEVERITY_WIDTH: usize = 10;
const MIN_DESCRIPTION_WIDTH: usize = 20;
const SHARE_BAR_WIDTH: usize = 20;

pub struct ResultsLogger;

impl ResultsLogger {

    pub fn print_summary(summary: &ResultsSummary) {
        let metrics = &summary.metrics;

        println!("\n📊 Validation Summary");
        println!("═══════════════════════════════════════");
        println!("   Last validated: {}", summary.file_name);
        println!("   Processed at:   {}", summary.processed_at);

        println!("\n📈 Overview:");
        println!("   📊 Total Projects: {}", metrics.total_rows);
        println!("   ✅ Valid Projects: {}", metrics.valid_rows);
        println!("   ⚠️  Issues Found:  {} (in {} rows)", metrics.issues_found, metrics.affected_rows);
        println!("   📈 Success Rate:   {}", percent(&metrics.success_rate.to_string()));
        println!("   📉 Error Rate:     {}", percent(&metrics.error_rate.to_string()));

        println!("\n⚡ By Severity:");
        for (severity, count) in summary.groupings.by_severity.entries() {
            println!("   {} {:<7} {}", severity.emoji(), severity.label(), count);
        }

        if !summary.groupings.by_type.is_empty() {
            println!("\n🏷️  By Issue Type:");
            for type_count in &summary.groupings.by_type {
                let filled = type_count.share.value()
                    .map(|share| (share / 100.0 * SHARE_BAR_WIDTH as f64).round() as usize)
                    .unwrap_or(0)
                    .min(SHARE_BAR_WIDTH);
                println!(
                    "   {} {:<24} {}{} {:>6} ({})",
                    issue_icon(&type_count.issue_type),
                    type_count.issue_type,
                    "█".repeat(filled),
                    "░".repeat(SHARE_BAR_WIDTH - filled),
                    percent(&type_count.share.to_string()),
                    type_count.count
                );
            }
        }
    }

    pub fn print_table(visible: &[VisibleIssue<'_>], criteria: &QueryCriteria, total: usize, description_width: usize, limit: Option<usize>) {
        println!("\n📋 Issues ({} of {} shown{})", visible.len().min(limit.unwrap_or(usize::MAX)), total, Self::criteria_note(criteria));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        if visible.is_empty() {
            println!("   No issues match the current filters.");
            return;
        }

        println!("{}", Self::header_line(description_width));
        for entry in visible.iter().take(limit.unwrap_or(usize::MAX)) {
            println!("{}", Self::format_row(entry, description_width));
        }

        if let Some(limit) = limit {
            if visible.len() > limit {
                println!("   … {} more. Use --limit or --export to see all.", visible.len() - limit);
            }
        }
    }

    pub fn header_line(description_width: usize) -> String {
        format!(
            "{:<rw$} {:<pw$} {:<tw$} {:<dw$} {:<dtw$} {:<sw$}",
            "Row", "Project Name", "Issue Type", "Description", "Dates", "Severity",
            rw = ROW_WIDTH, pw = PROJECT_WIDTH, tw = TYPE_WIDTH, dw = description_width, dtw = DATES_WIDTH, sw = SEVERITY_WIDTH,
        )
    }

    pub fn format_row(entry: &VisibleIssue<'_>, description_width: usize) -> String {
        let issue = entry.issue;
        let issue_type = format!("{} {}", issue_icon(&issue.issue_type), issue.issue_type);
        let severity = format!("{} {}", issue.severity.emoji(), issue.severity.label());

        format!(
            "{:<rw$} {:<pw$} {:<tw$} {:<dw$} {:<dtw$} {:<sw$}",
            issue.row,
            truncate(&issue.project_name, PROJECT_WIDTH),
            truncate(&issue_type, TYPE_WIDTH),
            truncate(&issue.description, description_width),
            truncate(&Self::dates_cell(issue.start_date.as_deref(), issue.end_date.as_deref()), DATES_WIDTH),
            severity,
            rw = ROW_WIDTH, pw = PROJECT_WIDTH, tw = TYPE_WIDTH, dw = description_width, dtw = DATES_WIDTH, sw = SEVERITY_WIDTH,
        )
    }

    pub fn dates_cell(start_date: Option<&str>, end_date: Option<&str>) -> String {
        match (start_date, end_date) {
            (Some(start), Some(end)) => format!("{} → {}", start, end),
            (Some(start), None) => format!("Start: {}", start),
            (None, Some(end)) => format!("End: {}", end),
            (None, None) => String::new(),
        }
    }

    /// Width left for the description column. A configured width wins;
    /// otherwise whatever the terminal leaves after the fixed columns.
    pub fn description_width(configured: usize) -> usize {
        if configured > 0 {
            return configured.max(MIN_DESCRIPTION_WIDTH);
        }

        let total = terminal_size()
            .map(|(Width(w), _)| w as usize)
            .unwrap_or(DEFAULT_TABLE_WIDTH);
        let fixed = ROW_WIDTH + PROJECT_WIDTH + TYPE_WIDTH + DATES_WIDTH + SEVERITY_WIDTH + 5;

        total.saturating_sub(fixed).max(MIN_DESCRIPTION_WIDTH)
    }

    fn criteria_note(criteria: &QueryCriteria) -> String {
        let mut parts = Vec::new();
        if criteria.severity != SeverityFilter::All {
            parts.push(format!("severity: {:?}", criteria.severity).to_lowercase());
        }
        if !criteria.search.is_empty() {
            parts.push(format!("search: \"{}\"", criteria.search));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!(", {}", parts.join(", "))
        }
    }
}

fn percent(value: &str) -> String {
    if value == "N/A" {
        value.to_string()
    } else {
        format!("{}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::severity::Severity;
    use crate::structs::issue::Issue;

    #[test]
    fn row_renders_empty_dates_for_missing_fields() {
        let issue = Issue::new(12, "Apollo", "Missing Date", "Start date is missing", Severity::High);
        let row = ResultsLogger::format_row(&VisibleIssue { index: 0, issue: &issue }, 30);

        assert!(row.starts_with("12 "));
        assert!(row.contains("❓ Missing Date"));
        assert!(row.contains("Start date is missing"));
    }

    #[test]
    fn dates_cell_handles_each_combination() {
        assert_eq!(ResultsLogger::dates_cell(Some("2024-01-01"), Some("2024-02-01")), "2024-01-01 → 2024-02-01");
        assert_eq!(ResultsLogger::dates_cell(Some("2024-01-01"), None), "Start: 2024-01-01");
        assert_eq!(ResultsLogger::dates_cell(None, None), "");
    }

    #[test]
    fn configured_description_width_wins() {
        assert_eq!(ResultsLogger::description_width(48), 48);
        assert_eq!(ResultsLogger::description_width(5), MIN_DESCRIPTION_WIDTH);
    }
}
