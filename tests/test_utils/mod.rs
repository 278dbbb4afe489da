//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
};
use serde_json::Value;

use tutor::api::AppState;
use tutor::api::app;
use tutor::core::AppConfig;

/// Config pointing at `api_hostname` with a test key and demo mode
/// off. Tests tweak the fields they care about.
pub fn test_config(api_hostname: &str) -> AppConfig {
    AppConfig {
        openai_api_hostname: api_hostname.to_string(),
        openai_api_key: Some(String::from("test-api-key")),
        openai_model: String::from("gpt-4o-mini"),
        demo_mode: false,
        request_timeout_secs: 5,
    }
}

/// Creates a test application router for the given config.
pub fn test_app(config: AppConfig) -> Router {
    let app_state = AppState::new(config).expect("Failed to build app state");
    app(Arc::new(app_state))
}

/// Builds a JSON POST to the tutor endpoint.
pub fn tutor_request(body: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/tutor")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
