use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};

use crate::{
    app_state::SharedState,
    health_response::{ConnectionCheckResponse, HealthEnvironment, HealthResponse},
};

pub struct HealthController {}

impl HealthController {
    pub async fn get(State(state): State<SharedState>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "API is working".to_string(),
            timestamp: now(),
            env: HealthEnvironment {
                has_database_url: state.settings.database_url().is_ok(),
                base_url: state.settings.base_url(),
            },
        })
    }

    /// Forces the store connection and reports whether it came up.
    pub async fn test_connection(
        State(state): State<SharedState>,
    ) -> (StatusCode, Json<ConnectionCheckResponse>) {
        match state.connection.data_context().await {
            Ok(_) => (
                StatusCode::OK,
                Json(ConnectionCheckResponse {
                    success: true,
                    message: Some("Store connection successful".to_string()),
                    error: None,
                    timestamp: now(),
                }),
            ),
            Err(e) => {
                tracing::error!(error = %e, "store connection check failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ConnectionCheckResponse {
                        success: false,
                        message: None,
                        error: Some(e.to_string()),
                        timestamp: now(),
                    }),
                )
            }
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
