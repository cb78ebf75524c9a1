//! Error types for the MCP authorization server.
//!
//! Uses `thiserror` for structured error handling. The only error domain in
//! this service is startup configuration: handlers project already-validated
//! immutable settings and have no failure modes of their own.

/// Errors raised while loading [`crate::config::Settings`].
///
/// All variants are fatal: they abort startup before the server binds a
/// socket. Nothing here is transient, so nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A required setting was not present in the environment.
    #[error("missing required setting '{key}'")]
    Missing {
        /// Environment key that was looked up
        key: String,
    },

    /// A setting that must be a URL failed to parse.
    #[error("setting '{key}' is not a valid URL ({value:?}): {source}")]
    InvalidUrl {
        /// Environment key that was looked up
        key: String,
        /// The offending value
        value: String,
        /// Parser error from the `url` crate
        #[source]
        source: url::ParseError,
    },

    /// A URL-valued setting parsed but is not an absolute URL with a host.
    #[error("setting '{key}' must be an absolute URL with a host (got {value:?})")]
    NotAbsolute {
        /// Environment key that was looked up
        key: String,
        /// The offending value
        value: String,
    },

    /// A setting had a value outside its accepted forms.
    #[error("setting '{key}' has invalid value {value:?}: {reason}")]
    InvalidValue {
        /// Environment key that was looked up
        key: String,
        /// The offending value
        value: String,
        /// What was expected instead
        reason: String,
    },
}

impl ConfigError {
    /// Create a missing-setting error.
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::Missing { key: key.into() }
    }

    /// Create a not-absolute-URL error.
    #[must_use]
    pub fn not_absolute(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotAbsolute { key: key.into(), value: value.into() }
    }

    /// Create an invalid-value error.
    #[must_use]
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue { key: key.into(), value: value.into(), reason: reason.into() }
    }
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_key() {
        let err = ConfigError::missing("PROTECTED_RESOURCE_METADATA__RESOURCE");
        assert!(err.to_string().contains("PROTECTED_RESOURCE_METADATA__RESOURCE"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::invalid_value("DEBUG", "maybe", "expected a boolean");
        let msg = err.to_string();
        assert!(msg.contains("DEBUG"));
        assert!(msg.contains("expected a boolean"));
    }
}
