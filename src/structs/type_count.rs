use serde::Serialize;
use crate::enums::rate::Rate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub issue_type: String,
    pub count: usize,
    pub share: Rate,
}
