//! Exact-tag component queries
//!
//! Each query enumerates candidates through a [`Hierarchy`] primitive and
//! keeps the handles whose stored tag equals the query tag. A handle with no
//! tag is not a recognized typed entity and is skipped.

use crate::scan;
use tether_host::Hierarchy;
use tether_model::{BackingHandle, NodeId, TaggedType, TypeTag};

/// Nearest handle of type `tag` on `node` itself
pub fn component<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    tag: TypeTag,
) -> Option<BackingHandle> {
    scan::first_match(&hierarchy.components_on(node), tag)
}

/// Nearest handle of type `tag` on `node` or below it
pub fn component_in_children<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    tag: TypeTag,
    include_inactive: bool,
) -> Option<BackingHandle> {
    scan::first_match(&hierarchy.components_in_children(node, include_inactive), tag)
}

/// Nearest handle of type `tag` on `node` or above it
pub fn component_in_parent<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    tag: TypeTag,
    include_inactive: bool,
) -> Option<BackingHandle> {
    scan::first_match(&hierarchy.components_in_parent(node, include_inactive), tag)
}

/// All handles of type `tag` on `node` itself, enumeration order
pub fn components<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    tag: TypeTag,
) -> Vec<BackingHandle> {
    scan::all_matches(&hierarchy.components_on(node), tag)
}

/// All handles of type `tag` on `node` and below it, enumeration order
pub fn components_in_children<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    tag: TypeTag,
    include_inactive: bool,
) -> Vec<BackingHandle> {
    scan::all_matches(&hierarchy.components_in_children(node, include_inactive), tag)
}

/// All handles of type `tag` on `node` and above it, enumeration order
pub fn components_in_parent<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
    tag: TypeTag,
    include_inactive: bool,
) -> Vec<BackingHandle> {
    scan::all_matches(&hierarchy.components_in_parent(node, include_inactive), tag)
}

/// [`component`] keyed by a registered Rust type
pub fn component_of<T: TaggedType, H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
) -> Option<BackingHandle> {
    component(hierarchy, node, T::type_tag())
}

/// [`components`] keyed by a registered Rust type
pub fn components_of<T: TaggedType, H: Hierarchy + ?Sized>(
    hierarchy: &H,
    node: NodeId,
) -> Vec<BackingHandle> {
    components(hierarchy, node, T::type_tag())
}
