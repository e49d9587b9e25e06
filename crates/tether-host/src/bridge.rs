//! The host bridge seam

use crate::error::HostError;
use crate::layout::FieldLayout;
use std::sync::Arc;
use tether_model::{Backing, BackingHandle, BackingId, ProxyHandle, ProxyId, TypeTag};

/// Capabilities the host supplies to the sync engine
///
/// The bridge owns the identity mapping between the two representations:
/// `proxy_for` is idempotent, so one backing cell resolves to the same proxy
/// instance for the life of the process.
pub trait HostBridge: Send + Sync {
    /// Proxy instance for `backing`, created on first resolution
    ///
    /// # Errors
    /// Returns an error when the cell cannot be given a typed counterpart,
    /// e.g. when it carries no recognized type tag.
    fn proxy_for(&self, backing: &BackingHandle) -> Result<ProxyHandle, HostError>;

    /// Existing backing cell of `proxy`, if one has been linked
    fn backing_of(&self, proxy: &ProxyHandle) -> Option<BackingHandle>;

    /// Cell registered under `id`, if it still exists
    fn resolve_backing(&self, id: BackingId) -> Option<BackingHandle>;

    /// Proxy registered under `id`, if it still exists
    fn resolve_proxy(&self, id: ProxyId) -> Option<ProxyHandle>;

    /// Logical type of `backing`
    ///
    /// The default reads the heap type-tag convention; hosts with their own
    /// program metadata may override.
    fn logical_type(&self, backing: &Backing) -> Option<TypeTag> {
        backing.type_tag()
    }

    /// Reflected field layout of `tag`
    fn layout_of(&self, tag: TypeTag) -> Option<Arc<FieldLayout>>;

    /// Create and register a backing cell for `proxy`
    ///
    /// # Errors
    /// Returns an error when the host refuses the creation.
    fn create_backing(&self, proxy: &ProxyHandle) -> Result<BackingHandle, HostError>;

    /// Create a backing cell for `proxy`, recording the creation as an
    /// undoable editing step
    ///
    /// # Errors
    /// Returns an error when the host refuses the creation.
    fn create_backing_with_undo(&self, proxy: &ProxyHandle) -> Result<BackingHandle, HostError>;
}
