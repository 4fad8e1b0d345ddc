use serde::Serialize;
use crate::structs::issue_groupings::IssueGroupings;
use crate::structs::result_metrics::ResultMetrics;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub file_name: String,
    pub processed_at: String,
    pub metrics: ResultMetrics,
    pub groupings: IssueGroupings,
}
