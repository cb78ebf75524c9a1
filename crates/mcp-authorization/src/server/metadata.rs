//! Well-known discovery endpoint handlers.
//!
//! Serves the metadata endpoints specified in:
//! - RFC 9728: OAuth 2.0 Protected Resource Metadata
//! - RFC 8414: OAuth 2.0 Authorization Server Metadata
//!
//! Handlers are pure projections of the immutable [`Settings`]; there is no
//! per-request validation or error path.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::config::Settings;
use crate::models::{AuthorizationServerMetadata, ProtectedResourceMetadata};

/// RFC 9728 discovery path.
pub const PROTECTED_RESOURCE_METADATA_URI: &str = "/.well-known/oauth-protected-resource";

/// RFC 8414 canonical discovery path.
pub const AUTHORIZATION_SERVER_METADATA_URI: &str = "/.well-known/oauth-authorization-server";

/// OpenID Connect discovery alias for the RFC 8414 document.
pub const OPENID_CONFIGURATION_URI: &str = "/.well-known/openid-configuration";

/// `GET /.well-known/oauth-protected-resource`
pub async fn protected_resource_metadata(
    State(settings): State<Arc<Settings>>,
) -> impl IntoResponse {
    Json(ProtectedResourceMetadata::from_settings(&settings))
}

/// `OPTIONS /.well-known/oauth-protected-resource`
pub async fn protected_resource_options() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET, OPTIONS")])
}

/// `GET /.well-known/oauth-authorization-server` (and the OpenID alias)
///
/// Placeholder document: a well-formed empty JSON object. See
/// [`AuthorizationServerMetadata`] for the documented gap.
pub async fn authorization_server_metadata() -> impl IntoResponse {
    Json(AuthorizationServerMetadata::default())
}
