use std::path::{Path, PathBuf};
use chrono::{NaiveDate, Utc};
use crate::config::constants::{CSV_HEADERS, EXPORT_FILE_PREFIX};
use crate::errors::{SheetvalError, SheetvalResult};
use crate::structs::visible_issue::VisibleIssue;

/// Serializes the visible issues to CSV.
///
/// Project name, issue type and description are wrapped in double quotes
/// so embedded commas survive. Embedded quotes and newlines are written as
/// they are, matching the existing export format byte for byte.
pub struct CsvExporter;

impl CsvExporter {

    pub fn render(issues: &[VisibleIssue<'_>]) -> String {
        let mut lines = Vec::with_capacity(issues.len() + 1);
        lines.push(CSV_HEADERS.join(","));

        for visible in issues {
            let issue = visible.issue;
            lines.push(format!(
                "{},\"{}\",\"{}\",\"{}\",{},{},{}",
                issue.row,
                issue.project_name,
                issue.issue_type,
                issue.description,
                issue.severity.as_str(),
                issue.start_date.as_deref().unwrap_or(""),
                issue.end_date.as_deref().unwrap_or(""),
            ));
        }

        lines.join("\n")
    }

    pub fn file_name_for(date: NaiveDate) -> String {
        format!("{}{}.csv", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
    }

    pub fn file_name_today() -> String {
        Self::file_name_for(Utc::now().date_naive())
    }

    /// Writes the export into `dir` under today's file name and returns the
    /// path written.
    pub fn save(dir: &Path, issues: &[VisibleIssue<'_>]) -> SheetvalResult<PathBuf> {
        Self::save_as(dir, &Self::file_name_today(), issues)
    }

    pub fn save_as(dir: &Path, file_name: &str, issues: &[VisibleIssue<'_>]) -> SheetvalResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .map_err(|e| SheetvalError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;

        let path = dir.join(file_name);
        std::fs::write(&path, Self::render(issues))
            .map_err(|e| SheetvalError::file_error(&path.display().to_string(), "write", &e.to_string()))?;

        log::info!("💾 Exported {} issues to {}", issues.len(), path.display());
        Ok(path)
    }
}
