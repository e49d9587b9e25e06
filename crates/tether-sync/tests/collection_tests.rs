//! Collection-mode purity and dependency gathering

use std::sync::Arc;
use tether_host::{FieldLayout, FieldSpec, HostBridge};
use tether_model::{BackingHandle, BackingId, StoreKind, TypeTag, Value, ValueKind, VariableStore};
use tether_sync::{SyncEngine, SyncPolicy};
use tether_test_utils::InMemoryHost;

const PAIR: TypeTag = TypeTag(8);

fn pair_layout() -> FieldLayout {
    FieldLayout::new(vec![
        FieldSpec::value("label", ValueKind::Str),
        FieldSpec::entity("left"),
        FieldSpec::entity("right"),
    ])
}

fn dep_ids(deps: &[BackingHandle]) -> Vec<BackingId> {
    deps.iter().map(|b| b.id()).collect()
}

fn snapshots(cells: &[BackingHandle]) -> Vec<(VariableStore, VariableStore)> {
    cells
        .iter()
        .map(|c| (c.snapshot(StoreKind::Heap), c.snapshot(StoreKind::Published)))
        .collect()
}

#[test]
fn collect_read_gathers_root_and_direct_references() {
    let host = Arc::new(InMemoryHost::new());
    host.register_layout(PAIR, pair_layout());

    let root = host.new_backing(PAIR);
    let a = host.new_backing(PAIR);
    let b = host.new_backing(PAIR);
    let deep = host.new_backing(PAIR);
    host.link(&root, "left", &a);
    host.link(&root, "right", &b);
    host.link(&a, "left", &deep);

    let engine = SyncEngine::new(host.clone() as Arc<dyn HostBridge>);
    let mut slot = None;
    let report = engine
        .read(SyncPolicy::COLLECT_ROOT_DEPENDENCIES, &mut slot, Some(&root))
        .unwrap();

    // Depth 1: the root and what it references directly, in encounter order.
    assert_eq!(dep_ids(&report.dependencies), vec![root.id(), a.id(), b.id()]);
}

#[test]
fn collect_read_mutates_nothing() {
    let host = Arc::new(InMemoryHost::new());
    host.register_layout(PAIR, pair_layout());

    let root = host.new_backing(PAIR);
    let a = host.new_backing(PAIR);
    host.set_var(&root, "label", Value::Str("root".into()));
    host.set_var(&a, "label", Value::Str("a".into()));
    host.link(&root, "left", &a);

    let cells = vec![root.clone(), a.clone()];
    let before = snapshots(&cells);

    let engine = SyncEngine::new(host.clone() as Arc<dyn HostBridge>);
    let mut slot = None;
    engine
        .read(SyncPolicy::COLLECT_ROOT_DEPENDENCIES, &mut slot, Some(&root))
        .unwrap();

    assert_eq!(snapshots(&cells), before);

    // The resolved proxy was not populated either.
    assert_eq!(slot.unwrap().get("label"), None);
}

#[test]
fn collect_deduplicates_shared_references() {
    let host = Arc::new(InMemoryHost::new());
    host.register_layout(PAIR, pair_layout());

    let root = host.new_backing(PAIR);
    let shared = host.new_backing(PAIR);
    host.link(&root, "left", &shared);
    host.link(&root, "right", &shared);

    let engine = SyncEngine::new(host.clone() as Arc<dyn HostBridge>);
    let mut slot = None;
    let report = engine
        .read(SyncPolicy::COLLECT_ROOT_DEPENDENCIES, &mut slot, Some(&root))
        .unwrap();

    assert_eq!(dep_ids(&report.dependencies), vec![root.id(), shared.id()]);
}

#[test]
fn collect_write_records_existing_backings_and_creates_nothing() {
    let host = Arc::new(InMemoryHost::new());
    host.register_layout(PAIR, pair_layout());

    let p_root = host.new_proxy(PAIR);
    let p_child = host.new_proxy(PAIR);
    let p_orphan = host.new_proxy(PAIR);
    host.link_proxy(&p_root, "left", &p_child);
    host.link_proxy(&p_root, "right", &p_orphan);

    let b_root = host.create_backing(&p_root).unwrap();
    let b_child = host.create_backing(&p_child).unwrap();

    let engine = SyncEngine::new(host.clone() as Arc<dyn HostBridge>);
    let mut slot = None;
    let report = engine
        .write(SyncPolicy::COLLECT_ROOT_DEPENDENCIES, &mut slot, Some(&p_root))
        .unwrap();

    assert_eq!(
        dep_ids(&report.dependencies),
        vec![b_root.id(), b_child.id()]
    );

    // Collection never materializes and never touches the slot.
    assert!(slot.is_none());
    assert!(host.backing_of(&p_orphan).is_none());
    assert!(host.undo_journal().is_empty());
}
