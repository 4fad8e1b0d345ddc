use serde::Serialize;
use crate::structs::issue::Issue;

/// An issue that passed the current criteria, with its position in the
/// full collection. Rows repeat, so `(row, index)` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibleIssue<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub issue: &'a Issue,
}

impl<'a> VisibleIssue<'a> {
    pub fn key(&self) -> (u64, usize) {
        (self.issue.row, self.index)
    }
}
