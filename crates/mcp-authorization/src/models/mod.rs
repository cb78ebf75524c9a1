//! Response models for the discovery endpoints.

pub mod metadata;

pub use metadata::{AuthorizationServerMetadata, ProtectedResourceMetadata};
