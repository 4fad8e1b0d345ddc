use serde::Serialize;
use crate::structs::severity_counts::SeverityCounts;
use crate::structs::type_count::TypeCount;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueGroupings {
    /// First-seen order of `issueType`.
    pub by_type: Vec<TypeCount>,
    pub by_severity: SeverityCounts,
}
