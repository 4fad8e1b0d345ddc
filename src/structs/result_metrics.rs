use serde::Serialize;
use crate::enums::rate::Rate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetrics {
    pub total_rows: u64,
    pub valid_rows: u64,
    pub issues_found: usize,
    pub affected_rows: usize,
    pub error_rate: Rate,
    pub success_rate: Rate,
}
