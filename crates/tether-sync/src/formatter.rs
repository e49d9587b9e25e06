//! Field formatter dispatch
//!
//! A [`FieldFormatter`] copies one entity's fields between its proxy and its
//! backing cell. Formatters never do their own cycle or depth bookkeeping:
//! entity-typed fields always reenter the engine through the [`Traversal`]
//! view so the shared context stays authoritative.

use crate::engine::Traversal;
use crate::error::SyncError;
use dashmap::DashMap;
use std::sync::Arc;
use tether_host::{FieldKind, FieldLayout, HostBridge};
use tether_model::{BackingHandle, FieldValue, ProxyHandle, TypeTag, Value};

/// Per-logical-type read/write routine
pub trait FieldFormatter: Send + Sync {
    /// Copy every field of `backing` into `proxy`
    ///
    /// # Errors
    /// Propagates nested traversal and field-access failures.
    fn read(
        &self,
        pass: &mut Traversal<'_>,
        proxy: &ProxyHandle,
        backing: &BackingHandle,
    ) -> Result<(), SyncError>;

    /// Copy every field of `proxy` into `backing`
    ///
    /// `backing` is absent when the entity has no cell and the policy chose
    /// not to create one; nested entity fields are still traversed.
    ///
    /// # Errors
    /// Propagates nested traversal and field-access failures.
    fn write(
        &self,
        pass: &mut Traversal<'_>,
        backing: Option<&BackingHandle>,
        proxy: &ProxyHandle,
    ) -> Result<(), SyncError>;
}

/// Formatter driven by a logical type's reflected field layout
///
/// Plain value fields are copied directly (and skipped entirely in
/// collection mode, keeping collection pure); entity fields are routed back
/// through the engine.
pub struct LayoutFormatter {
    layout: Arc<FieldLayout>,
}

impl LayoutFormatter {
    /// Build a formatter over `layout`
    #[must_use]
    pub fn new(layout: Arc<FieldLayout>) -> Self {
        Self { layout }
    }
}

impl FieldFormatter for LayoutFormatter {
    fn read(
        &self,
        pass: &mut Traversal<'_>,
        proxy: &ProxyHandle,
        backing: &BackingHandle,
    ) -> Result<(), SyncError> {
        let policy = pass.policy()?;
        let store = policy.store_kind();
        let collecting = policy.collects_dependencies();

        for field in self.layout.fields() {
            match field.kind {
                FieldKind::Value(_) => {
                    if collecting {
                        continue;
                    }
                    if let Some(value) = backing.get(store, &field.key) {
                        proxy.set(&field.key, FieldValue::Value(value))?;
                    }
                }
                FieldKind::Entity => {
                    let referenced = backing
                        .get(store, &field.key)
                        .and_then(|value| value.as_ref_id())
                        .and_then(|id| pass.bridge().resolve_backing(id));

                    let mut nested = None;
                    pass.read_slot(&mut nested, referenced.as_ref())?;

                    if !collecting {
                        proxy.set(&field.key, FieldValue::Entity(nested.map(|p| p.id())))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write(
        &self,
        pass: &mut Traversal<'_>,
        backing: Option<&BackingHandle>,
        proxy: &ProxyHandle,
    ) -> Result<(), SyncError> {
        let policy = pass.policy()?;
        let store = policy.store_kind();
        let collecting = policy.collects_dependencies();

        for field in self.layout.fields() {
            match field.kind {
                FieldKind::Value(_) => {
                    if collecting {
                        continue;
                    }
                    if let (Some(target), Some(FieldValue::Value(value))) =
                        (backing, proxy.get(&field.key))
                    {
                        target.set(store, &field.key, value);
                    }
                }
                FieldKind::Entity => {
                    let linked = match proxy.get(&field.key) {
                        Some(FieldValue::Entity(id)) => id,
                        _ => None,
                    };
                    let referenced = linked.and_then(|id| pass.bridge().resolve_proxy(id));

                    let mut nested = None;
                    pass.write_slot(&mut nested, referenced.as_ref())?;

                    if !collecting {
                        if let Some(target) = backing {
                            target.set(store, &field.key, Value::Ref(nested.map(|b| b.id())));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Memoized mapping from logical type to formatter
///
/// Resolved lazily on first encounter from the host's field layouts;
/// explicit registrations take precedence and are never overwritten.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: DashMap<TypeTag, Arc<dyn FieldFormatter>>,
}

impl FormatterRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a custom formatter for `tag`
    pub fn register(&self, tag: TypeTag, formatter: Arc<dyn FieldFormatter>) {
        self.formatters.insert(tag, formatter);
    }

    /// Whether a formatter is memoized for `tag`
    #[must_use]
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.formatters.contains_key(&tag)
    }

    /// Formatter for `tag`, building and memoizing a [`LayoutFormatter`]
    /// from the host layout on first encounter
    ///
    /// # Errors
    /// Returns [`SyncError::MissingLayout`] when the host knows no layout
    /// for `tag`.
    pub fn resolve(
        &self,
        bridge: &dyn HostBridge,
        tag: TypeTag,
    ) -> Result<Arc<dyn FieldFormatter>, SyncError> {
        if let Some(found) = self.formatters.get(&tag) {
            return Ok(Arc::clone(&found));
        }

        let layout = bridge.layout_of(tag).ok_or(SyncError::MissingLayout(tag))?;
        tracing::trace!(%tag, "memoizing layout formatter");
        let built: Arc<dyn FieldFormatter> = Arc::new(LayoutFormatter::new(layout));
        let entry = self.formatters.entry(tag).or_insert(built);
        Ok(Arc::clone(&entry))
    }
}
