//! MCP Authorization Metadata Server
//!
//! An HTTP service exposing OAuth 2.0 discovery metadata for MCP deployments:
//!
//! - **RFC 9728**: OAuth 2.0 Protected Resource Metadata
//! - **RFC 8414**: OAuth 2.0 Authorization Server Metadata
//!
//! The server publishes static, environment-sourced configuration at the
//! well-known discovery URIs, plus a health check and an embedded MCP tool
//! sub-application. There is no token issuance or validation here — the
//! service only advertises where such a service would live.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mcp_authorization::{config::Settings, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Arc::new(Settings::from_env()?);
//!     server::run(settings, "0.0.0.0", 8000).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod server;

pub use config::Settings;
pub use error::ConfigError;
