#![allow(dead_code)]

use std::{path::Path, sync::Arc};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use taskboard_server::{
    app_state::AppState, data_access::connection::ConnectionManager, map_routes, settings::Settings,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// A router over a fresh store in a temp dir. The dir lives as long as this.
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let router = router_for(&dir.path().join("tasks.redb"));
        Self { router, _dir: dir }
    }

    /// A router whose store can never be opened.
    pub fn with_broken_store() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let router = router_for(&dir.path().join("no-such-dir").join("tasks.redb"));
        Self { router, _dir: dir }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.send_request(request).await
    }

    pub async fn send_raw(&self, method: Method, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request");

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        let json = serde_json::from_slice(&bytes).expect("json body");
        (status, json)
    }

    pub async fn create(&self, body: Value) -> Value {
        let (status, json) = self.send(Method::POST, "/tasks", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["data"].clone()
    }
}

fn router_for(db_path: &Path) -> Router {
    let url = db_path.to_str().expect("utf-8 path").to_string();
    let settings = Settings {
        database_url: Some(url.clone()),
        ..Settings::default()
    };
    let connection = ConnectionManager::new(&url);
    map_routes(Arc::new(AppState::new(settings, connection)))
}
