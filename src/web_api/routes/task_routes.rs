use axum::{routing::get, Router};

use super::method_not_allowed;
use crate::{app_state::SharedState, task_controller::TaskController};

pub const ROUTER_PATH: &str = "/tasks";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(
            ROUTER_PATH,
            get(TaskController::list)
                .post(TaskController::create)
                .fallback(method_not_allowed),
        )
        .route(
            format!("{}/:id", ROUTER_PATH).as_str(),
            get(TaskController::get)
                .put(TaskController::update)
                .delete(TaskController::delete)
                .fallback(method_not_allowed),
        )
        .with_state(app_state)
}
