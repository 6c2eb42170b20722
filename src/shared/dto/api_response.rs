use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::task_error::TaskError;

pub const GENERIC_FAILURE: &str = "Internal server error";

/// The `{success, data|message|error}` wrapper every endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self { success: true, data: Some(data), message: None, error: None }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self { success: true, data: None, message: Some(message.into()), error: None }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self { success: false, data: None, message: None, error: Some(error.into()) }
    }
}

/// A failed request, ready to be rendered as an error envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Maps a task error to its status code. Store failures are logged and
    /// reported with `store_message` instead of the underlying cause.
    pub fn from_task(err: TaskError, store_message: &str) -> Self {
        match err {
            TaskError::Validation(_) | TaskError::MalformedId => Self::bad_request(err.to_string()),
            TaskError::NotFound => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            TaskError::Store(cause) => {
                tracing::error!(error = %cause, "{store_message}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, store_message)
            }
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        ApiError::from_task(err, GENERIC_FAILURE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::error(self.message))).into_response()
    }
}
