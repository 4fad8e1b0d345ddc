use serde::Deserialize;
use serde_json::Value;

/// Error payload of a non-2xx response. `detail` is usually a string but
/// request-validation failures send a list of field errors instead.
#[derive(Debug, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ServiceErrorBody {
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.as_str()),
            _ => None,
        }
    }
}
