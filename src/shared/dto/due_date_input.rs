use serde::Deserialize;

/// A `dueDate` as sent by clients: a date/time string, or milliseconds since
/// the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DueDateInput {
    Millis(i64),
    Text(String),
}

impl DueDateInput {
    /// An empty string counts as not sent.
    pub fn is_blank(&self) -> bool {
        matches!(self, DueDateInput::Text(text) if text.is_empty())
    }
}

impl From<&str> for DueDateInput {
    fn from(text: &str) -> Self {
        DueDateInput::Text(text.to_string())
    }
}

impl From<String> for DueDateInput {
    fn from(text: String) -> Self {
        DueDateInput::Text(text)
    }
}
