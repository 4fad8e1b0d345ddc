use serde::{Deserialize, Serialize};
use crate::enums::severity_filter::SeverityFilter;
use crate::enums::sort_key::SortKey;

/// Table criteria: severity filter, project-name search and sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCriteria {
    #[serde(default)]
    pub severity: SeverityFilter,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortKey,
}

impl QueryCriteria {
    pub fn new(severity: SeverityFilter, search: &str, sort: SortKey) -> Self {
        Self {
            severity,
            search: search.to_string(),
            sort,
        }
    }
}
