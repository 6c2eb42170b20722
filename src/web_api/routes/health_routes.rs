use axum::{routing::get, Router};

use super::method_not_allowed;
use crate::{app_state::SharedState, health_controller::HealthController};

pub const ROUTER_PATH: &str = "/health";
pub const CONNECTION_CHECK_PATH: &str = "/test-connection";

pub fn get_router(app_state: SharedState) -> Router {
    Router::new()
        .route(ROUTER_PATH, get(HealthController::get).fallback(method_not_allowed))
        .route(
            CONNECTION_CHECK_PATH,
            get(HealthController::test_connection).fallback(method_not_allowed),
        )
        .with_state(app_state)
}
