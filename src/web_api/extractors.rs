use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use uuid::Uuid;

use crate::{api_response::ApiError, task_error::TaskError};

/// `Json<T>` whose rejection is rendered as an error envelope.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            // Unparseable or mistyped bodies are validation failures; anything
            // else (content type, body size) keeps the status axum chose.
            Err(rejection @ (JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_))) => {
                Err(ApiError::bad_request(rejection.body_text()))
            }
            Err(rejection) => Err(ApiError::new(rejection.status(), rejection.body_text())),
        }
    }
}

/// The `:id` path segment, parsed as a task id.
#[derive(Debug, Clone, Copy)]
pub struct TaskIdParam(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for TaskIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::from(TaskError::MalformedId))?;

        Uuid::parse_str(&raw)
            .map(TaskIdParam)
            .map_err(|_| ApiError::from(TaskError::MalformedId))
    }
}
