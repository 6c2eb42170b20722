use serde::Deserialize;

use crate::due_date_input::DueDateInput;

/// Body of `POST /tasks`. Everything is optional here so that a missing field
/// becomes a validation message instead of a body-parse rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DueDateInput>,
    pub status: Option<String>,
}
