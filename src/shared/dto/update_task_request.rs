use serde::{Deserialize, Deserializer};

use crate::due_date_input::DueDateInput;

/// Body of `PUT /tasks/:id`.
///
/// The outer `Option` says whether the key was sent at all, the inner one
/// whether it was `null`. Sending `"title": null` is an attempt to clear a
/// required field and fails validation; leaving `title` out keeps it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<DueDateInput>>,
    pub status: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
