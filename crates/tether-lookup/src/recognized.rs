//! Any-recognized-entity queries
//!
//! The degenerate form of the typed queries: the tag-equality comparison is
//! skipped and the first candidate with a present tag wins.

use crate::scan;
use tether_host::Hierarchy;
use tether_model::{BackingHandle, NodeId};

/// Nearest recognized typed entity on `node` itself
pub fn first<H: Hierarchy + ?Sized>(hierarchy: &H, node: NodeId) -> Option<BackingHandle> {
    scan::first_tagged(&hierarchy.components_on(node))
}

/// Nearest recognized typed entity on `node` or below it
pub fn first_in_children<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    include_inactive: bool,
) -> Option<BackingHandle> {
    scan::first_tagged(&hierarchy.components_in_children(node, include_inactive))
}

/// Nearest recognized typed entity on `node` or above it
pub fn first_in_parent<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    include_inactive: bool,
) -> Option<BackingHandle> {
    scan::first_tagged(&hierarchy.components_in_parent(node, include_inactive))
}

/// All recognized typed entities on `node` itself, enumeration order
pub fn all<H: Hierarchy + ?Sized>(hierarchy: &H, node: NodeId) -> Vec<BackingHandle> {
    scan::all_tagged(&hierarchy.components_on(node))
}

/// All recognized typed entities on `node` and below it, enumeration order
pub fn all_in_children<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    include_inactive: bool,
) -> Vec<BackingHandle> {
    scan::all_tagged(&hierarchy.components_in_children(node, include_inactive))
}

/// All recognized typed entities on `node` and above it, enumeration order
pub fn all_in_parent<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    include_inactive: bool,
) -> Vec<BackingHandle> {
    scan::all_tagged(&hierarchy.components_in_parent(node, include_inactive))
}
