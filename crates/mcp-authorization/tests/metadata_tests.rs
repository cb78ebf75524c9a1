//! Integration tests for the well-known discovery endpoints.
//!
//! Drives the assembled axum Router directly with `tower::ServiceExt`.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use mcp_authorization::config::Settings;
use mcp_authorization::server::create_router;

fn build_router(settings: Settings) -> axum::Router {
    create_router(Arc::new(settings))
}

fn settings_from(pairs: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Settings::from_vars(&vars).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_protected_resource_metadata_full_document() {
    // The end-to-end example configuration, bare-key form.
    let app = build_router(settings_from(&[
        ("RESOURCE", "https://localhost:8000/"),
        ("AUTHORIZATION_SERVERS", "https://localhost:8000"),
        ("SCOPES_SUPPORTED", "read:data,write:data"),
        ("RESOURCE_NAME", "MCP Authorization"),
        ("RESOURCE_DOCUMENTATION", "https://localhost:8000/docs"),
    ]));

    let response = app
        .oneshot(Request::get("/.well-known/oauth-protected-resource").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap(),
        "application/json"
    );

    assert_eq!(
        body_json(response).await,
        json!({
            "resource": "https://localhost:8000/",
            "authorization_servers": ["https://localhost:8000"],
            "scopes_supported": ["read:data", "write:data"],
            "bearer_methods_supported": ["header"],
            "resource_signing_alg_values_supported": ["RS256"],
            "resource_name": "MCP Authorization",
            "resource_documentation": "https://localhost:8000/docs"
        })
    );
}

#[tokio::test]
async fn test_protected_resource_metadata_nested_env_form() {
    let app = build_router(settings_from(&[
        ("PROTECTED_RESOURCE_METADATA__RESOURCE", "https://rs.example.com/"),
        ("PROTECTED_RESOURCE_METADATA__SCOPES_SUPPORTED", "mcp"),
    ]));

    let response = app
        .oneshot(Request::get("/.well-known/oauth-protected-resource").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["resource"], "https://rs.example.com/");
    assert_eq!(body["scopes_supported"], json!(["mcp"]));
}

#[tokio::test]
async fn test_protected_resource_metadata_omits_absent_fields() {
    let app = build_router(settings_from(&[("RESOURCE", "https://localhost:8000/")]));

    let response = app
        .oneshot(Request::get("/.well-known/oauth-protected-resource").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let object = body.as_object().unwrap();

    // Defaults are present even when unset...
    assert_eq!(object["bearer_methods_supported"], json!(["header"]));
    assert_eq!(object["resource_signing_alg_values_supported"], json!(["RS256"]));

    // ...but absent optionals are omitted entirely, never null.
    assert!(!object.contains_key("authorization_servers"));
    assert!(!object.contains_key("scopes_supported"));
    assert!(!object.contains_key("resource_name"));
    assert!(!object.contains_key("resource_documentation"));
}

#[tokio::test]
async fn test_protected_resource_metadata_preserves_list_order() {
    let app = build_router(settings_from(&[
        ("RESOURCE", "https://localhost:8000/"),
        ("BEARER_METHODS_SUPPORTED", "query,body,header"),
        ("RESOURCE_SIGNING_ALG_VALUES_SUPPORTED", "ES256,RS256"),
    ]));

    let response = app
        .oneshot(Request::get("/.well-known/oauth-protected-resource").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body["bearer_methods_supported"], json!(["query", "body", "header"]));
    assert_eq!(body["resource_signing_alg_values_supported"], json!(["ES256", "RS256"]));
}

#[tokio::test]
async fn test_protected_resource_options_preflight() {
    let app = build_router(Settings::for_testing("https://localhost:8000/"));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/.well-known/oauth-protected-resource")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers().get(header::ALLOW).unwrap().to_str().unwrap(), "GET, OPTIONS");
}

#[tokio::test]
async fn test_authorization_server_metadata_is_empty_object() {
    let app = build_router(Settings::for_testing("https://localhost:8000/"));

    for path in ["/.well-known/oauth-authorization-server", "/.well-known/openid-configuration"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(body_json(response).await, json!({}), "{path}");
    }
}

#[tokio::test]
async fn test_invalid_resource_never_serves() {
    // Startup validation rejects the configuration, so no router exists to
    // ever answer a request.
    let vars: HashMap<String, String> =
        [("RESOURCE".to_string(), "not-a-url".to_string())].into_iter().collect();
    assert!(Settings::from_vars(&vars).is_err());
}
