//! Integration tests for application assembly: root, health, and prefixing.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use mcp_authorization::config::Settings;
use mcp_authorization::server::create_router;

fn build_router(settings: Settings) -> axum::Router {
    create_router(Arc::new(settings))
}

fn prefixed_settings(prefix: &str) -> Settings {
    let vars: HashMap<String, String> = [
        ("RESOURCE".to_string(), "https://localhost:8000/".to_string()),
        ("PREFIX".to_string(), prefix.to_string()),
    ]
    .into_iter()
    .collect();
    Settings::from_vars(&vars).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_root_endpoint() {
    let app = build_router(Settings::for_testing("https://localhost:8000/"));

    let response = app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Hello, World!" }));
}

#[tokio::test]
async fn test_health_check() {
    let app = build_router(Settings::for_testing("https://localhost:8000/"));

    let response =
        app.oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_routes_register_under_prefix() {
    let app = build_router(prefixed_settings("/api"));

    // Prefixed routes answer under the prefix...
    let response = app
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/.well-known/oauth-protected-resource").body(Body::empty()).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // ...and nowhere else.
    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The root greeting stays outside the prefix.
    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Hello, World!" }));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = build_router(Settings::for_testing("https://localhost:8000/"));

    let response =
        app.oneshot(Request::get("/nope").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
