use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::structs::issue::Issue;

/// Result envelope returned by the validation service for one upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub total_rows: u64,
    pub valid_rows: u64,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub processed_at: String,
    #[serde(default)]
    pub file_name: String,
}

impl ValidationResult {
    /// `processedAt` rendered in local time. The service may omit the
    /// offset, in which case the timestamp is taken as local already.
    pub fn processed_at_display(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.processed_at) {
            return parsed.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
        }
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&self.processed_at, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        self.processed_at.clone()
    }
}
