use proptest::prelude::*;
use sheetval::enums::severity::Severity;
use sheetval::enums::severity_filter::SeverityFilter;
use sheetval::enums::sort_key::SortKey;
use sheetval::services::results_aggregator::ResultsAggregator;
use sheetval::services::results_query::ResultsQuery;
use sheetval::structs::issue::Issue;
use sheetval::structs::query_criteria::QueryCriteria;

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::High), Just(Severity::Medium), Just(Severity::Low)]
}

fn severity_filter() -> impl Strategy<Value = SeverityFilter> {
    prop_oneof![
        Just(SeverityFilter::All),
        Just(SeverityFilter::High),
        Just(SeverityFilter::Medium),
        Just(SeverityFilter::Low),
    ]
}

fn issues() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(
        (1u64..40, "[A-Za-z ]{0,12}", severity()),
        0..30,
    ).prop_map(|rows| {
        rows.into_iter()
            .map(|(row, name, severity)| Issue::new(row, &name, "Missing Date", "", severity))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_visible_issue_matches_both_filters(
        issues in issues(),
        filter in severity_filter(),
        search in "[A-Za-z]{0,3}",
    ) {
        let criteria = QueryCriteria::new(filter, &search, SortKey::Row);
        let needle = search.to_lowercase();

        for visible in ResultsQuery::visible(&issues, &criteria) {
            prop_assert!(filter.matches(visible.issue.severity));
            prop_assert!(visible.issue.project_name.to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn search_ignores_case(issues in issues(), search in "[A-Za-z]{0,3}") {
        let lower = ResultsQuery::visible(&issues, &QueryCriteria::new(SeverityFilter::All, &search.to_lowercase(), SortKey::Row));
        let upper = ResultsQuery::visible(&issues, &QueryCriteria::new(SeverityFilter::All, &search.to_uppercase(), SortKey::Row));

        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn unfiltered_query_is_a_permutation(issues in issues(), sort_by_severity in any::<bool>()) {
        let sort = if sort_by_severity { SortKey::Severity } else { SortKey::Row };
        let visible = ResultsQuery::visible(&issues, &QueryCriteria::new(SeverityFilter::All, "", sort));

        let mut indices: Vec<usize> = visible.iter().map(|v| v.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..issues.len()).collect::<Vec<_>>());
    }

    #[test]
    fn sort_orders_are_monotonic_and_stable(issues in issues()) {
        let by_row = ResultsQuery::visible(&issues, &QueryCriteria::new(SeverityFilter::All, "", SortKey::Row));
        for pair in by_row.windows(2) {
            prop_assert!(pair[0].issue.row <= pair[1].issue.row);
            if pair[0].issue.row == pair[1].issue.row {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }

        let by_severity = ResultsQuery::visible(&issues, &QueryCriteria::new(SeverityFilter::All, "", SortKey::Severity));
        for pair in by_severity.windows(2) {
            prop_assert!(pair[0].issue.severity.rank() <= pair[1].issue.severity.rank());
            if pair[0].issue.severity == pair[1].issue.severity {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }

    #[test]
    fn severity_buckets_sum_to_issue_count(issues in issues()) {
        let groupings = ResultsAggregator::groupings(&issues);
        let by_type_total: usize = groupings.by_type.iter().map(|t| t.count).sum();

        prop_assert_eq!(groupings.by_severity.total(), issues.len());
        prop_assert_eq!(by_type_total, issues.len());
    }
}
