//! Configuration for the MCP authorization server.
//!
//! Settings are read from the environment once at startup (a `.env` file, if
//! present, is loaded first by the binary) and then shared read-only with
//! every handler. Grouped keys use the `__` delimiter, e.g.
//! `PROTECTED_RESOURCE_METADATA__RESOURCE`; the bare key (`RESOURCE`) is
//! accepted as an alias, with the grouped form winning when both are set.
//!
//! Validation happens here, not per request: a malformed `resource` URL
//! aborts startup before the server binds a socket.

use std::collections::HashMap;

use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Environment variable group for RFC 9728 metadata settings.
const METADATA_GROUP: &str = "PROTECTED_RESOURCE_METADATA";

/// Default application name.
const DEFAULT_APP_NAME: &str = "MCP Authorization";

/// Defaults for RFC 9728 list-valued fields.
pub mod defaults {
    /// Default bearer token transport methods (RFC 6750 Section 2.1).
    pub const BEARER_METHODS: &[&str] = &["header"];

    /// Default JWS signing algorithms for resource responses.
    pub const SIGNING_ALGS: &[&str] = &["RS256"];
}

/// RFC 9728 Protected Resource Metadata configuration.
///
/// Field-for-field source of the discovery document served at
/// `/.well-known/oauth-protected-resource`. List order is preserved as
/// declared; values are not deduplicated.
#[derive(Debug, Clone)]
pub struct ProtectedResourceConfig {
    /// The protected resource's resource identifier. Required, absolute URL.
    pub resource: Url,

    /// Issuer identifiers of authorization servers usable with this resource.
    pub authorization_servers: Option<Vec<String>>,

    /// Scope values used in authorization requests for this resource.
    pub scopes_supported: Option<Vec<String>>,

    /// Supported methods of sending a bearer token (`header`, `body`, `query`).
    pub bearer_methods_supported: Vec<String>,

    /// JWS signing algorithms supported for signed resource responses.
    pub resource_signing_alg_values_supported: Vec<String>,

    /// Human-readable display name.
    pub resource_name: Option<String>,

    /// URL of human-readable developer documentation. Absolute when present.
    pub resource_documentation: Option<Url>,
}

/// Application settings.
///
/// Constructed exactly once at process start and never mutated; concurrent
/// readers need no synchronization.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Application display name.
    pub app_name: String,

    /// Debug flag, surfaced in startup logging only.
    pub debug: bool,

    /// Route prefix under which all routes except `/` are registered.
    /// Empty, or starts with `/` and has no trailing slash.
    pub prefix: String,

    /// RFC 9728 metadata configuration.
    pub protected_resource_metadata: ProtectedResourceConfig,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `resource` is missing or any URL-valued
    /// setting is not an absolute URL. Callers should treat this as fatal.
    pub fn from_env() -> ConfigResult<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Load settings from an explicit key/value map.
    ///
    /// Factored out of [`Self::from_env`] so tests never have to mutate the
    /// process environment. Unrecognized keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on missing or malformed values.
    pub fn from_vars(vars: &HashMap<String, String>) -> ConfigResult<Self> {
        let app_name =
            vars.get("APP_NAME").cloned().unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let debug = match vars.get("DEBUG") {
            Some(raw) => parse_bool("DEBUG", raw)?,
            None => false,
        };
        let prefix = match vars.get("PREFIX") {
            Some(raw) => parse_prefix(raw)?,
            None => String::new(),
        };

        Ok(Self {
            app_name,
            debug,
            prefix,
            protected_resource_metadata: load_metadata_config(vars)?,
        })
    }

    /// Create a test configuration with the given resource identifier and
    /// everything else at its defaults.
    ///
    /// # Panics
    ///
    /// Panics if `resource` is not a valid absolute URL. Test-support only.
    #[must_use]
    pub fn for_testing(resource: &str) -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            debug: false,
            prefix: String::new(),
            protected_resource_metadata: ProtectedResourceConfig {
                resource: Url::parse(resource).expect("test resource URL"),
                authorization_servers: None,
                scopes_supported: None,
                bearer_methods_supported: string_vec(defaults::BEARER_METHODS),
                resource_signing_alg_values_supported: string_vec(defaults::SIGNING_ALGS),
                resource_name: None,
                resource_documentation: None,
            },
        }
    }
}

fn load_metadata_config(vars: &HashMap<String, String>) -> ConfigResult<ProtectedResourceConfig> {
    let resource_key = grouped_key("RESOURCE");
    let resource_raw =
        lookup(vars, "RESOURCE").ok_or_else(|| ConfigError::missing(&resource_key))?;
    let resource = parse_absolute_url(&resource_key, resource_raw)?;

    let resource_documentation = lookup(vars, "RESOURCE_DOCUMENTATION")
        .map(|raw| parse_absolute_url(&grouped_key("RESOURCE_DOCUMENTATION"), raw))
        .transpose()?;

    Ok(ProtectedResourceConfig {
        resource,
        authorization_servers: lookup(vars, "AUTHORIZATION_SERVERS").map(parse_list),
        scopes_supported: lookup(vars, "SCOPES_SUPPORTED").map(parse_list),
        bearer_methods_supported: lookup(vars, "BEARER_METHODS_SUPPORTED")
            .map(parse_list)
            .unwrap_or_else(|| string_vec(defaults::BEARER_METHODS)),
        resource_signing_alg_values_supported: lookup(
            vars,
            "RESOURCE_SIGNING_ALG_VALUES_SUPPORTED",
        )
        .map(parse_list)
        .unwrap_or_else(|| string_vec(defaults::SIGNING_ALGS)),
        resource_name: lookup(vars, "RESOURCE_NAME").map(str::to_string),
        resource_documentation,
    })
}

/// Look up a metadata key, preferring the `__`-grouped form over the bare one.
fn lookup<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(&grouped_key(key)).or_else(|| vars.get(key)).map(String::as_str)
}

fn grouped_key(key: &str) -> String {
    format!("{METADATA_GROUP}__{key}")
}

/// Parse a comma-delimited list, preserving order without deduplication.
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn parse_bool(key: &str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::invalid_value(key, raw, "expected a boolean (true/false)")),
    }
}

/// Normalize and validate the route prefix: empty, or `/`-leading with no
/// trailing slash.
fn parse_prefix(raw: &str) -> ConfigResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::invalid_value("PREFIX", raw, "prefix must start with '/'"));
    }
    Ok(trimmed.to_string())
}

/// Parse a URL and require it to be absolute with a host (scheme + host).
fn parse_absolute_url(key: &str, raw: &str) -> ConfigResult<Url> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        key: key.to_string(),
        value: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ConfigError::not_absolute(key, raw));
    }
    Ok(url)
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
