//! In-memory host bridge

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use tether_host::{FieldLayout, HostBridge, HostError};
use tether_model::{
    Backing, BackingHandle, BackingId, FieldValue, ModelError, Proxy, ProxyHandle, ProxyId,
    ProxyState, TypeTag, Value,
};

/// Map-backed proxy state accepting any field name
#[derive(Debug)]
pub struct MapProxyState {
    tag: TypeTag,
    fields: IndexMap<String, FieldValue>,
}

impl MapProxyState {
    pub fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

impl ProxyState for MapProxyState {
    fn type_tag(&self) -> TypeTag {
        self.tag
    }

    fn get(&self, key: &str) -> Option<FieldValue> {
        self.fields.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: FieldValue) -> Result<(), ModelError> {
        self.fields.insert(key.to_string(), value);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One recorded undoable editing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoStep {
    pub proxy: ProxyId,
    pub backing: BackingId,
}

/// Append-only log of undoable creations
#[derive(Debug, Default)]
pub struct UndoJournal {
    steps: Mutex<Vec<UndoStep>>,
}

impl UndoJournal {
    pub fn record(&self, step: UndoStep) {
        self.steps.lock().push(step);
    }

    pub fn steps(&self) -> Vec<UndoStep> {
        self.steps.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.steps.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.lock().is_empty()
    }
}

/// Reference [`HostBridge`] implementation over in-memory registries
///
/// Owns every backing cell and proxy it hands out and keeps the two-way
/// linkage between them, so `proxy_for` is idempotent.
#[derive(Default)]
pub struct InMemoryHost {
    backings: RwLock<HashMap<BackingId, BackingHandle>>,
    proxies: RwLock<HashMap<ProxyId, ProxyHandle>>,
    proxy_of: RwLock<HashMap<BackingId, ProxyId>>,
    backing_for: RwLock<HashMap<ProxyId, BackingId>>,
    layouts: RwLock<HashMap<TypeTag, Arc<FieldLayout>>>,
    undo: UndoJournal,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_layout(&self, tag: TypeTag, layout: FieldLayout) {
        self.layouts.write().insert(tag, Arc::new(layout));
    }

    /// Create and register a tagged backing cell
    pub fn new_backing(&self, tag: TypeTag) -> BackingHandle {
        let cell: BackingHandle = Arc::new(Backing::with_tag(tag));
        self.backings.write().insert(cell.id(), Arc::clone(&cell));
        cell
    }

    /// Create and register a detached proxy with no backing cell
    pub fn new_proxy(&self, tag: TypeTag) -> ProxyHandle {
        let proxy: ProxyHandle = Arc::new(Proxy::new(Box::new(MapProxyState::new(tag))));
        self.proxies.write().insert(proxy.id(), Arc::clone(&proxy));
        proxy
    }

    /// Set a variable in both of the cell's tables, as a live host keeping
    /// its direct-field table mirrored would
    pub fn set_var(&self, cell: &BackingHandle, key: &str, value: Value) {
        cell.set(tether_model::StoreKind::Heap, key, value.clone());
        cell.set(tether_model::StoreKind::Published, key, value);
    }

    /// Point `cell`'s variable `key` at `target`
    pub fn link(&self, cell: &BackingHandle, key: &str, target: &BackingHandle) {
        self.set_var(cell, key, Value::Ref(Some(target.id())));
    }

    /// Point proxy `a`'s field `key` at proxy `b`
    pub fn link_proxy(&self, a: &ProxyHandle, key: &str, b: &ProxyHandle) {
        a.set(key, FieldValue::Entity(Some(b.id())))
            .expect("map proxy state accepts any field");
    }

    pub fn undo_journal(&self) -> &UndoJournal {
        &self.undo
    }

    fn materialize(&self, proxy: &ProxyHandle) -> BackingHandle {
        let cell = self.new_backing(proxy.tag());
        self.proxy_of.write().insert(cell.id(), proxy.id());
        self.backing_for.write().insert(proxy.id(), cell.id());
        cell
    }
}

impl HostBridge for InMemoryHost {
    fn proxy_for(&self, backing: &BackingHandle) -> Result<ProxyHandle, HostError> {
        if let Some(id) = self.proxy_of.read().get(&backing.id()) {
            if let Some(proxy) = self.proxies.read().get(id) {
                return Ok(Arc::clone(proxy));
            }
        }

        let tag = backing
            .type_tag()
            .ok_or(HostError::UntypedBacking(backing.id()))?;

        // Adopt cells created outside the host so they stay resolvable.
        self.backings
            .write()
            .entry(backing.id())
            .or_insert_with(|| Arc::clone(backing));

        let proxy = self.new_proxy(tag);
        self.proxy_of.write().insert(backing.id(), proxy.id());
        self.backing_for.write().insert(proxy.id(), backing.id());
        Ok(proxy)
    }

    fn backing_of(&self, proxy: &ProxyHandle) -> Option<BackingHandle> {
        let id = *self.backing_for.read().get(&proxy.id())?;
        self.backings.read().get(&id).cloned()
    }

    fn resolve_backing(&self, id: BackingId) -> Option<BackingHandle> {
        self.backings.read().get(&id).cloned()
    }

    fn resolve_proxy(&self, id: ProxyId) -> Option<ProxyHandle> {
        self.proxies.read().get(&id).cloned()
    }

    fn layout_of(&self, tag: TypeTag) -> Option<Arc<FieldLayout>> {
        self.layouts.read().get(&tag).cloned()
    }

    fn create_backing(&self, proxy: &ProxyHandle) -> Result<BackingHandle, HostError> {
        Ok(self.materialize(proxy))
    }

    fn create_backing_with_undo(&self, proxy: &ProxyHandle) -> Result<BackingHandle, HostError> {
        let cell = self.materialize(proxy);
        self.undo.record(UndoStep {
            proxy: proxy.id(),
            backing: cell.id(),
        });
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_for_is_idempotent() {
        let host = InMemoryHost::new();
        let cell = host.new_backing(TypeTag(1));

        let first = host.proxy_for(&cell).unwrap();
        let second = host.proxy_for(&cell).unwrap();
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn proxy_for_requires_a_tag() {
        let host = InMemoryHost::new();
        let bare: BackingHandle = Arc::new(Backing::new());

        let result = host.proxy_for(&bare);
        assert!(matches!(result, Err(HostError::UntypedBacking(_))));
    }

    #[test]
    fn created_backing_is_linked_both_ways() {
        let host = InMemoryHost::new();
        let proxy = host.new_proxy(TypeTag(2));
        assert!(host.backing_of(&proxy).is_none());

        let cell = host.create_backing(&proxy).unwrap();
        assert_eq!(host.backing_of(&proxy).unwrap().id(), cell.id());
        assert_eq!(host.proxy_for(&cell).unwrap().id(), proxy.id());
        assert!(host.undo_journal().is_empty());
    }

    #[test]
    fn undo_creation_is_journaled() {
        let host = InMemoryHost::new();
        let proxy = host.new_proxy(TypeTag(2));

        let cell = host.create_backing_with_undo(&proxy).unwrap();
        let steps = host.undo_journal().steps();
        assert_eq!(
            steps,
            vec![UndoStep {
                proxy: proxy.id(),
                backing: cell.id()
            }]
        );
    }

    #[test]
    fn set_var_mirrors_both_tables() {
        let host = InMemoryHost::new();
        let cell = host.new_backing(TypeTag(3));
        host.set_var(&cell, "hp", Value::Int(5));

        assert_eq!(
            cell.get(tether_model::StoreKind::Heap, "hp"),
            Some(Value::Int(5))
        );
        assert_eq!(
            cell.get(tether_model::StoreKind::Published, "hp"),
            Some(Value::Int(5))
        );
    }
}
