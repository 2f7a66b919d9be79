//! Error payloads returned by the GitLab API.

use serde::Deserialize;
use serde_json::Value;

/// Body of a non-success GitLab response.
///
/// GitLab uses `{"message": "..."}`, `{"message": {"field": ["..."]}}` or the
/// OAuth-style `{"error": "...", "error_description": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ApiErrorBody {
    /// Flatten the payload into one readable line, if it carries anything.
    pub fn summary(&self) -> Option<String> {
        if let Some(message) = &self.message {
            let text = flatten_message(message);
            if !text.is_empty() {
                return Some(text);
            }
        }
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => Some(format!("{error}: {description}")),
            (Some(error), None) => Some(error.clone()),
            (None, Some(description)) => Some(description.clone()),
            (None, None) => None,
        }
    }
}

fn flatten_message(message: &Value) -> String {
    match message {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(fields) => fields
            .iter()
            .map(|(field, msgs)| format!("{field}: {}", flatten_message(msgs)))
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
