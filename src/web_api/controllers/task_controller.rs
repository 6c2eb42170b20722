use axum::{extract::State, http::StatusCode, Json};

use crate::{
    api_response::{ApiError, ApiResponse},
    app_state::SharedState,
    create_task_request::CreateTaskRequest,
    data_access::data_context::DataContext,
    task::Task,
    task_error::TaskError,
    task_response::TaskResponse,
    update_task_request::UpdateTaskRequest,
    validation,
    web_api::extractors::{ApiJson, TaskIdParam},
};

const LIST_FAILED: &str = "Error fetching tasks.";
const CREATE_FAILED: &str = "Error creating task.";
const GET_FAILED: &str = "Error fetching task.";
const UPDATE_FAILED: &str = "Error updating task.";
const DELETE_FAILED: &str = "Error deleting task.";
const DELETED: &str = "Task deleted successfully.";

pub struct TaskController {}

impl TaskController {
    pub async fn list(
        State(state): State<SharedState>,
    ) -> Result<Json<ApiResponse<Vec<TaskResponse>>>, ApiError> {
        let tasks = Self::with_store(&state, |ctx| Ok(ctx.list_tasks()?))
            .await
            .map_err(|e| ApiError::from_task(e, LIST_FAILED))?;

        Ok(Json(ApiResponse::data(tasks.iter().map(Task::to_response).collect())))
    }

    pub async fn create(
        State(state): State<SharedState>,
        ApiJson(body): ApiJson<CreateTaskRequest>,
    ) -> Result<(StatusCode, Json<ApiResponse<TaskResponse>>), ApiError> {
        let draft = validation::validate_new_task(body).map_err(ApiError::from)?;
        let task = Task::new(draft);

        Self::with_store(&state, |ctx| Ok(ctx.create_task(&task)?))
            .await
            .map_err(|e| ApiError::from_task(e, CREATE_FAILED))?;

        tracing::info!(task_id = %task.id, "task created");
        Ok((StatusCode::CREATED, Json(ApiResponse::data(task.to_response()))))
    }

    pub async fn get(
        State(state): State<SharedState>,
        TaskIdParam(id): TaskIdParam,
    ) -> Result<Json<ApiResponse<TaskResponse>>, ApiError> {
        let task = Self::with_store(&state, |ctx| ctx.get_task(id))
            .await
            .map_err(|e| ApiError::from_task(e, GET_FAILED))?;

        Ok(Json(ApiResponse::data(task.to_response())))
    }

    pub async fn update(
        State(state): State<SharedState>,
        TaskIdParam(id): TaskIdParam,
        ApiJson(body): ApiJson<UpdateTaskRequest>,
    ) -> Result<Json<ApiResponse<TaskResponse>>, ApiError> {
        let changes = validation::validate_changes(body).map_err(ApiError::from)?;

        let task = Self::with_store(&state, |ctx| ctx.update_task(id, changes))
            .await
            .map_err(|e| ApiError::from_task(e, UPDATE_FAILED))?;

        tracing::info!(task_id = %id, status = %task.status, "task updated");
        Ok(Json(ApiResponse::data(task.to_response())))
    }

    pub async fn delete(
        State(state): State<SharedState>,
        TaskIdParam(id): TaskIdParam,
    ) -> Result<Json<ApiResponse<()>>, ApiError> {
        Self::with_store(&state, |ctx| ctx.delete_task(id))
            .await
            .map_err(|e| ApiError::from_task(e, DELETE_FAILED))?;

        tracing::info!(task_id = %id, "task deleted");
        Ok(Json(ApiResponse::message(DELETED)))
    }

    async fn with_store<T, F>(state: &SharedState, op: F) -> Result<T, TaskError>
    where
        F: FnOnce(&DataContext) -> Result<T, TaskError>,
    {
        let ctx = state.connection.data_context().await?;
        op(ctx)
    }
}
