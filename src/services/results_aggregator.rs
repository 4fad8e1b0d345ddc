use std::collections::{HashMap, HashSet};
use crate::enums::rate::Rate;
use crate::structs::issue::Issue;
use crate::structs::issue_groupings::IssueGroupings;
use crate::structs::result_metrics::ResultMetrics;
use crate::structs::results_summary::ResultsSummary;
use crate::structs::severity_counts::SeverityCounts;
use crate::structs::type_count::TypeCount;
use crate::structs::validation_result::ValidationResult;

/// Summary numbers over the complete issue collection. Filters applied to
/// the table never change these.
pub struct ResultsAggregator;

impl ResultsAggregator {

    pub fn metrics(result: &ValidationResult) -> ResultMetrics {
        let issues_found = result.issues.len();
        let affected_rows = result.issues
            .iter()
            .map(|issue| issue.row)
            .collect::<HashSet<_>>()
            .len();

        ResultMetrics {
            total_rows: result.total_rows,
            valid_rows: result.valid_rows,
            issues_found,
            affected_rows,
            error_rate: Rate::of(issues_found as u64, result.total_rows),
            success_rate: Rate::of(result.valid_rows, result.total_rows),
        }
    }

    pub fn groupings(issues: &[Issue]) -> IssueGroupings {
        let mut by_type: Vec<TypeCount> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut by_severity = SeverityCounts::default();

        for issue in issues {
            by_severity.record(issue.severity);

            match positions.get(issue.issue_type.as_str()) {
                Some(&position) => by_type[position].count += 1,
                None => {
                    positions.insert(issue.issue_type.as_str(), by_type.len());
                    by_type.push(TypeCount {
                        issue_type: issue.issue_type.clone(),
                        count: 1,
                        share: Rate::NotApplicable,
                    });
                }
            }
        }

        let total = issues.len() as u64;
        for entry in &mut by_type {
            entry.share = Rate::of(entry.count as u64, total);
        }

        IssueGroupings { by_type, by_severity }
    }

    pub fn summarize(result: &ValidationResult) -> ResultsSummary {
        ResultsSummary {
            file_name: result.file_name.clone(),
            processed_at: result.processed_at_display(),
            metrics: Self::metrics(result),
            groupings: Self::groupings(&result.issues),
        }
    }
}
