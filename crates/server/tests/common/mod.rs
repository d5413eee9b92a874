#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use server::routes::build_router;
use server::state::ServerState;
use service::memory::InMemoryStore;
use service::Repositories;
use tower::util::ServiceExt;

pub struct TestContext {
    pub store: Arc<InMemoryStore>,
    pub app: axum::Router,
}

pub fn build_test_context() -> TestContext {
    let store = Arc::new(InMemoryStore::new());
    let app = build_router(ServerState::new(Repositories::in_memory(store.clone())));
    TestContext { store, app }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("body should be json")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("body should be utf-8")
    }
}

/// Send one request through the router; `body` is sent verbatim.
pub async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("Content-Type", "application/json");
    }
    let req = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("request should build");

    let resp = app.clone().oneshot(req).await.expect("request should be handled");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.expect("body should read");
    TestResponse { status, headers, body }
}

pub async fn create_customer(app: &axum::Router, name: &str) -> Value {
    let resp = send(app, "POST", "/customers", Some(&serde_json::json!({ "name": name }).to_string())).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    resp.json()
}
