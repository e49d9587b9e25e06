//! In-memory scene graph

use std::collections::HashMap;
use tether_host::Hierarchy;
use tether_model::{BackingHandle, NodeId};

#[derive(Debug)]
struct SceneNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    components: Vec<BackingHandle>,
    active: bool,
}

impl SceneNode {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            components: Vec::new(),
            active: true,
        }
    }
}

/// Hierarchy of nodes with ordered components and an active flag
///
/// Child enumeration is preorder (a node before its children, children in
/// insertion order); inactive subtrees are pruned unless the query includes
/// inactive nodes. Parent enumeration walks upward from the node itself.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: HashMap<NodeId, SceneNode>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(id, SceneNode::new(None));
        id
    }

    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = NodeId::new();
        self.nodes.insert(id, SceneNode::new(Some(parent)));
        self.nodes
            .get_mut(&parent)
            .expect("parent node exists")
            .children
            .push(id);
        id
    }

    pub fn attach(&mut self, node: NodeId, component: BackingHandle) {
        self.nodes
            .get_mut(&node)
            .expect("node exists")
            .components
            .push(component);
    }

    pub fn set_active(&mut self, node: NodeId, active: bool) {
        self.nodes.get_mut(&node).expect("node exists").active = active;
    }

    fn collect_subtree(&self, node: NodeId, include_inactive: bool, out: &mut Vec<BackingHandle>) {
        let Some(entry) = self.nodes.get(&node) else {
            return;
        };
        if !include_inactive && !entry.active {
            return;
        }
        out.extend(entry.components.iter().cloned());
        for child in &entry.children {
            self.collect_subtree(*child, include_inactive, out);
        }
    }
}

impl Hierarchy for SceneGraph {
    fn components_on(&self, node: NodeId) -> Vec<BackingHandle> {
        self.nodes
            .get(&node)
            .map(|entry| entry.components.clone())
            .unwrap_or_default()
    }

    fn components_in_children(&self, node: NodeId, include_inactive: bool) -> Vec<BackingHandle> {
        let mut out = Vec::new();
        self.collect_subtree(node, include_inactive, &mut out);
        out
    }

    fn components_in_parent(&self, node: NodeId, include_inactive: bool) -> Vec<BackingHandle> {
        let mut out = Vec::new();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let Some(entry) = self.nodes.get(&id) else {
                break;
            };
            if include_inactive || entry.active {
                out.extend(entry.components.iter().cloned());
            }
            cursor = entry.parent;
        }
        out
    }
}
