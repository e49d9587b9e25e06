//! Error types for host capabilities

use tether_model::{BackingId, ProxyId, TypeTag};

/// Errors raised by a [`crate::HostBridge`] implementation
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Cell carries no recognized type tag, so no proxy can be resolved
    #[error("backing {0} has no recognized type tag")]
    UntypedBacking(BackingId),

    /// No layout is registered for the logical type
    #[error("no layout registered for type {0}")]
    UnknownType(TypeTag),

    /// Proxy id did not resolve
    #[error("proxy not found: {0}")]
    ProxyNotFound(ProxyId),

    /// Host refused to create a backing cell
    #[error("backing creation failed: {0}")]
    CreationFailed(String),
}
