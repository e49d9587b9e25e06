//! The hierarchy enumeration seam

use tether_model::{BackingHandle, NodeId};

/// Ordered enumeration of type-erased handles in the host hierarchy
///
/// Enumeration order is the hierarchy's own order and is what lookup results
/// preserve; implementations must keep it stable between the counting and
/// filling passes of a multi-result query.
pub trait Hierarchy {
    /// Handles attached directly to `node`
    fn components_on(&self, node: NodeId) -> Vec<BackingHandle>;

    /// Handles on `node` and all of its descendants, preorder
    fn components_in_children(&self, node: NodeId, include_inactive: bool) -> Vec<BackingHandle>;

    /// Handles on `node` and all of its ancestors, walking upward
    fn components_in_parent(&self, node: NodeId, include_inactive: bool) -> Vec<BackingHandle>;
}
