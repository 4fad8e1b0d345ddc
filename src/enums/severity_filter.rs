use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeverityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl SeverityFilter {
    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::High => severity == Severity::High,
            SeverityFilter::Medium => severity == Severity::Medium,
            SeverityFilter::Low => severity == Severity::Low,
        }
    }
}
