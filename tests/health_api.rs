mod api_support;

use api_support::TestApp;
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn health_reports_without_touching_the_store() {
    let app = TestApp::with_broken_store();

    let (status, json) = app.send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "API is working");
    assert_eq!(json["env"]["hasDatabaseUrl"], true);
    assert_eq!(json["env"]["baseUrl"], "http://localhost:3000");
    assert!(json["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
}

#[tokio::test]
async fn connection_check_succeeds_on_a_working_store() {
    let app = TestApp::new();

    let (status, json) = app.send(Method::GET, "/test-connection", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Store connection successful");
}

#[tokio::test]
async fn connection_check_reports_failure() {
    let app = TestApp::with_broken_store();

    let (status, json) = app.send(Method::GET, "/test-connection", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
}
