use crate::enums::sort_key::SortKey;
use crate::structs::issue::Issue;
use crate::structs::query_criteria::QueryCriteria;
use crate::structs::visible_issue::VisibleIssue;

pub struct ResultsQuery;

impl ResultsQuery {

    /// Issues passing both the severity filter and the project-name search,
    /// in the order given by the sort key. Sorting is stable, so ties keep
    /// their collection order.
    pub fn visible<'a>(issues: &'a [Issue], criteria: &QueryCriteria) -> Vec<VisibleIssue<'a>> {
        let needle = criteria.search.to_lowercase();

        let mut visible: Vec<VisibleIssue<'a>> = issues
            .iter()
            .enumerate()
            .filter(|(_, issue)| criteria.severity.matches(issue.severity))
            .filter(|(_, issue)| needle.is_empty() || issue.project_name.to_lowercase().contains(&needle))
            .map(|(index, issue)| VisibleIssue { index, issue })
            .collect();

        match criteria.sort {
            SortKey::Row => visible.sort_by_key(|v| v.issue.row),
            SortKey::Severity => visible.sort_by_key(|v| v.issue.severity.rank()),
        }

        visible
    }
}
