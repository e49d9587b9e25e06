//! Error types for the synchronization engine

use tether_host::HostError;
use tether_model::{BackingId, ModelError, TypeTag};

/// Errors raised by a synchronization traversal
///
/// A missing backing cell on read is an absence, not an error; the proxy
/// slot is cleared instead. Likewise a missing type tag during lookup merely
/// excludes the candidate.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A traversal entry ran without an installed policy
    #[error("no active synchronization policy")]
    InvalidConfiguration,

    /// Depth counter would go negative, or did not unwind to zero
    #[error("traversal depth invariant violated")]
    DepthInvariantViolation,

    /// No formatter could be built for the logical type
    #[error("no layout available for type {0}")]
    MissingLayout(TypeTag),

    /// The backing cell's logical type could not be resolved
    #[error("backing {0} has no resolvable logical type")]
    UnknownLogicalType(BackingId),

    /// Host capability failure
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// Typed field access failure
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
