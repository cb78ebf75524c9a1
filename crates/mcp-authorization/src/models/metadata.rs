//! OAuth 2.0 discovery metadata models.
//!
//! - RFC 9728: OAuth 2.0 Protected Resource Metadata
//!   <https://datatracker.ietf.org/doc/html/rfc9728>
//! - RFC 8414: OAuth 2.0 Authorization Server Metadata
//!   <https://datatracker.ietf.org/doc/html/rfc8414>
//!
//! Serialization policy: absent optional fields are omitted from the JSON
//! body, never emitted as `null`.

use serde::Serialize;
use url::Url;

use crate::config::Settings;

/// OAuth 2.0 Protected Resource Metadata (RFC 9728 Section 2).
///
/// Carries only the metadata needed to facilitate the MCP authorization
/// spec, mapped field-for-field from [`Settings`].
#[derive(Debug, Clone, Serialize)]
pub struct ProtectedResourceMetadata {
    /// The protected resource's resource identifier (RFC 9728 Section 1.2).
    pub resource: Url,

    /// Issuer identifiers (RFC 8414) of authorization servers that can be
    /// used with this protected resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_servers: Option<Vec<String>>,

    /// Scope values (RFC 6749) used in authorization requests to request
    /// access to this protected resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes_supported: Option<Vec<String>>,

    /// Supported methods of sending a bearer token (RFC 6750): `header`,
    /// `body`, `query`.
    pub bearer_methods_supported: Vec<String>,

    /// JWS signing algorithms supported for signing resource responses.
    pub resource_signing_alg_values_supported: Vec<String>,

    /// Human-readable name of the protected resource for end-user display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,

    /// URL of a page with human-readable developer documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_documentation: Option<Url>,
}

impl ProtectedResourceMetadata {
    /// Project the configured metadata into a response document.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let meta = &settings.protected_resource_metadata;
        Self {
            resource: meta.resource.clone(),
            authorization_servers: meta.authorization_servers.clone(),
            scopes_supported: meta.scopes_supported.clone(),
            bearer_methods_supported: meta.bearer_methods_supported.clone(),
            resource_signing_alg_values_supported: meta
                .resource_signing_alg_values_supported
                .clone(),
            resource_name: meta.resource_name.clone(),
            resource_documentation: meta.resource_documentation.clone(),
        }
    }
}

/// OAuth 2.0 Authorization Server Metadata (RFC 8414).
///
/// Deliberately empty: this deployment does not run an authorization server
/// and only guarantees a well-formed JSON object at the discovery path.
/// Issuer and endpoint fields must be added before pointing real clients at
/// it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthorizationServerMetadata {}
