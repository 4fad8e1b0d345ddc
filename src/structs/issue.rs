use serde::{Deserialize, Deserializer, Serialize};
use crate::enums::severity::Severity;

/// One validation finding reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub row: u64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub issue_type: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Issue {
    pub fn new(row: u64, project_name: &str, issue_type: &str, description: &str, severity: Severity) -> Self {
        Self {
            row,
            project_name: project_name.to_string(),
            issue_type: issue_type.to_string(),
            description: description.to_string(),
            severity,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_dates(mut self, start_date: Option<&str>, end_date: Option<&str>) -> Self {
        self.start_date = start_date.map(|s| s.to_string());
        self.end_date = end_date.map(|s| s.to_string());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_missing_optional_fields() {
        let issue: Issue = serde_json::from_str(
            r#"{"row": 4, "projectName": null, "issueType": "Missing Date", "description": "Start date is missing", "severity": "high"}"#,
        ).unwrap();

        assert_eq!(issue.project_name, "");
        assert_eq!(issue.start_date, None);
        assert_eq!(issue.end_date, None);
        assert_eq!(issue.severity, Severity::High);
    }
}
