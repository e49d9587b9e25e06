//! Lookup emulation over an in-memory scene

use proptest::prelude::*;
use std::sync::Arc;
use tether_lookup::{recognized, typed};
use tether_model::{Backing, BackingHandle, TaggedType, TypeTag};
use tether_test_utils::SceneGraph;

fn cell(tag: i64) -> BackingHandle {
    Arc::new(Backing::with_tag(TypeTag(tag)))
}

fn untagged() -> BackingHandle {
    Arc::new(Backing::new())
}

#[test]
fn single_and_multi_results_follow_enumeration_order() {
    let mut scene = SceneGraph::new();
    let parent = scene.add_root();
    let x = cell(7);
    let y = cell(3);
    let z = cell(7);
    for c in [&x, &y, &z] {
        let child = scene.add_child(parent);
        scene.attach(child, Arc::clone(c));
    }

    let first = typed::component_in_children(&scene, parent, TypeTag(7), false).unwrap();
    assert_eq!(first.id(), x.id());

    let all: Vec<_> = typed::components_in_children(&scene, parent, TypeTag(7), false)
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(all, vec![x.id(), z.id()]);

    assert!(typed::component_in_children(&scene, parent, TypeTag(9), false).is_none());
    assert!(typed::components_in_children(&scene, parent, TypeTag(9), false).is_empty());
}

#[test]
fn queries_on_the_node_itself() {
    let mut scene = SceneGraph::new();
    let node = scene.add_root();
    let a = cell(4);
    let b = cell(5);
    let c = cell(4);
    scene.attach(node, Arc::clone(&a));
    scene.attach(node, Arc::clone(&b));
    scene.attach(node, Arc::clone(&c));

    assert_eq!(typed::component(&scene, node, TypeTag(4)).unwrap().id(), a.id());
    assert_eq!(typed::components(&scene, node, TypeTag(4)).len(), 2);
    assert_eq!(typed::components(&scene, node, TypeTag(5)).len(), 1);
}

#[test]
fn inactive_nodes_are_excluded_unless_requested() {
    let mut scene = SceneGraph::new();
    let parent = scene.add_root();
    let active_child = scene.add_child(parent);
    let inactive_child = scene.add_child(parent);
    let hidden = cell(7);
    scene.attach(active_child, cell(7));
    scene.attach(inactive_child, Arc::clone(&hidden));
    scene.set_active(inactive_child, false);

    assert_eq!(
        typed::components_in_children(&scene, parent, TypeTag(7), false).len(),
        1
    );
    assert_eq!(
        typed::components_in_children(&scene, parent, TypeTag(7), true).len(),
        2
    );
}

#[test]
fn parent_queries_find_the_nearest_match_upward() {
    let mut scene = SceneGraph::new();
    let root = scene.add_root();
    let mid = scene.add_child(root);
    let leaf = scene.add_child(mid);

    let far = cell(6);
    let near = cell(6);
    scene.attach(root, Arc::clone(&far));
    scene.attach(mid, Arc::clone(&near));

    let found = typed::component_in_parent(&scene, leaf, TypeTag(6), false).unwrap();
    assert_eq!(found.id(), near.id());

    let all = typed::components_in_parent(&scene, leaf, TypeTag(6), false);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), near.id());
    assert_eq!(all[1].id(), far.id());
}

#[test]
fn unrecognized_handles_are_skipped() {
    let mut scene = SceneGraph::new();
    let node = scene.add_root();
    let plain = untagged();
    let tagged = cell(2);
    scene.attach(node, Arc::clone(&plain));
    scene.attach(node, Arc::clone(&tagged));

    // The degenerate query answers "any recognized typed entity".
    assert_eq!(recognized::first(&scene, node).unwrap().id(), tagged.id());
    let all: Vec<_> = recognized::all(&scene, node).iter().map(|c| c.id()).collect();
    assert_eq!(all, vec![tagged.id()]);

    assert!(typed::component(&scene, node, TypeTag(2)).is_some());
}

#[test]
fn recognized_queries_walk_the_hierarchy_too() {
    let mut scene = SceneGraph::new();
    let root = scene.add_root();
    let child = scene.add_child(root);
    scene.attach(root, untagged());
    let below = cell(1);
    scene.attach(child, Arc::clone(&below));

    assert_eq!(
        recognized::first_in_children(&scene, root, false).unwrap().id(),
        below.id()
    );
    assert_eq!(
        recognized::first_in_parent(&scene, child, false).unwrap().id(),
        below.id()
    );
    assert_eq!(recognized::all_in_children(&scene, root, false).len(), 1);
    assert_eq!(recognized::all_in_parent(&scene, child, false).len(), 1);
}

struct Health;

impl TaggedType for Health {
    fn type_tag() -> TypeTag {
        TypeTag(7)
    }
}

#[test]
fn type_keyed_sugar_matches_raw_tags() {
    let mut scene = SceneGraph::new();
    let node = scene.add_root();
    let h = cell(7);
    scene.attach(node, Arc::clone(&h));
    scene.attach(node, cell(8));

    assert_eq!(
        typed::component_of::<Health, _>(&scene, node).unwrap().id(),
        h.id()
    );
    assert_eq!(typed::components_of::<Health, _>(&scene, node).len(), 1);
}

proptest! {
    #[test]
    fn prop_multi_result_matches_a_naive_filter(
        tags in proptest::collection::vec(0i64..4, 0..12),
        query in 0i64..4,
    ) {
        let mut scene = SceneGraph::new();
        let node = scene.add_root();
        let cells: Vec<_> = tags.iter().map(|t| cell(*t)).collect();
        for c in &cells {
            scene.attach(node, Arc::clone(c));
        }

        let found = typed::components(&scene, node, TypeTag(query));
        let expected: Vec<_> = cells
            .iter()
            .filter(|c| c.type_tag() == Some(TypeTag(query)))
            .map(|c| c.id())
            .collect();

        let ids: Vec<_> = found.iter().map(|c| c.id()).collect();
        prop_assert_eq!(ids, expected);
        // Two-pass construction allocates exactly once.
        prop_assert_eq!(found.capacity(), found.len());
    }
}
