use crate::data_access::data_context::StoreError;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Everything a task operation can fail with.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// One or more field rules failed. Messages are already comma-joined.
    #[error("{0}")]
    Validation(String),
    #[error("Invalid task ID format.")]
    MalformedId,
    #[error("Task not found.")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TaskError {
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = messages
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        TaskError::Validation(joined)
    }
}
