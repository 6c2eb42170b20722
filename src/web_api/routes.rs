pub mod health_routes;
pub mod task_routes;

use axum::{http::StatusCode, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    api_response::ApiError,
    app_state::SharedState,
};

pub fn map_routes(app_state: SharedState) -> Router {
    Router::new()
        .merge(task_routes::get_router(app_state.clone()))
        .merge(health_routes::get_router(app_state))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Route not found.")
}

/// Known path, unsupported verb.
pub(crate) async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed.")
}
