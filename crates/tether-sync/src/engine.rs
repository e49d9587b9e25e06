//! The synchronization engine
//!
//! [`SyncEngine::read`] and [`SyncEngine::write`] run one top-level
//! traversal each. The gate lock serializes top-level traversals against
//! each other; nested entity fields reenter on the same call stack through
//! the [`Traversal`] view, so the lock is taken exactly once per call and
//! the context is threaded through by `&mut`.

use crate::context::{SyncContext, SyncReport};
use crate::error::SyncError;
use crate::formatter::{FieldFormatter, FormatterRegistry};
use crate::policy::{ChildProxyMode, SyncPolicy};
use parking_lot::Mutex;
use std::sync::Arc;
use tether_host::HostBridge;
use tether_model::{BackingHandle, ProxyHandle, TypeTag};

/// Policy-driven synchronization between proxies and backing cells
pub struct SyncEngine {
    bridge: Arc<dyn HostBridge>,
    formatters: FormatterRegistry,
    gate: Mutex<SyncContext>,
}

impl SyncEngine {
    /// Create an engine over the host's capability bridge
    #[must_use]
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self {
            bridge,
            formatters: FormatterRegistry::new(),
            gate: Mutex::new(SyncContext::new()),
        }
    }

    /// Install a custom formatter for `tag`, overriding layout resolution
    pub fn register_formatter(&self, tag: TypeTag, formatter: Arc<dyn FieldFormatter>) {
        self.formatters.register(tag, formatter);
    }

    /// Populate `slot` from `backing` under `policy`
    ///
    /// An absent backing clears the slot in mutation mode and is a no-op in
    /// collection mode. Otherwise the slot receives the cell's proxy even
    /// when the depth limit leaves it unpopulated.
    ///
    /// # Errors
    /// Fails fast on precondition violations and propagates nested formatter
    /// failures; the context is reset on every exit path.
    pub fn read(
        &self,
        policy: SyncPolicy,
        slot: &mut Option<ProxyHandle>,
        backing: Option<&BackingHandle>,
    ) -> Result<SyncReport, SyncError> {
        let mut cx = self.gate.lock();
        cx.install(policy);
        tracing::debug!(?policy, "sync read");

        let outcome = Traversal {
            bridge: self.bridge.as_ref(),
            formatters: &self.formatters,
            cx: &mut cx,
        }
        .read_slot(slot, backing);

        let report = cx.teardown();
        outcome.and(report)
    }

    /// Populate `slot` with `proxy`'s backing cell under `policy`, writing
    /// the proxy's fields into it
    ///
    /// A proxy with no cell is materialized (or left detached) per
    /// [`ChildProxyMode`]; an absent proxy clears the slot in mutation mode.
    ///
    /// # Errors
    /// Fails fast on precondition violations and propagates nested formatter
    /// failures; the context is reset on every exit path.
    pub fn write(
        &self,
        policy: SyncPolicy,
        slot: &mut Option<BackingHandle>,
        proxy: Option<&ProxyHandle>,
    ) -> Result<SyncReport, SyncError> {
        let mut cx = self.gate.lock();
        cx.install(policy);
        tracing::debug!(?policy, "sync write");

        let outcome = Traversal {
            bridge: self.bridge.as_ref(),
            formatters: &self.formatters,
            cx: &mut cx,
        }
        .write_slot(slot, proxy);

        let report = cx.teardown();
        outcome.and(report)
    }
}

/// Reentrant view of the running traversal
///
/// Field formatters receive this view and route entity-typed fields back
/// through [`Traversal::read_slot`] / [`Traversal::write_slot`] instead of
/// doing their own cycle or depth bookkeeping.
pub struct Traversal<'a> {
    pub(crate) bridge: &'a dyn HostBridge,
    pub(crate) formatters: &'a FormatterRegistry,
    pub(crate) cx: &'a mut SyncContext,
}

impl<'a> Traversal<'a> {
    /// Host capability bridge
    #[inline]
    #[must_use]
    pub fn bridge(&self) -> &'a dyn HostBridge {
        self.bridge
    }

    /// Active policy
    ///
    /// # Errors
    /// Returns [`SyncError::InvalidConfiguration`] outside a top-level call.
    pub fn policy(&self) -> Result<SyncPolicy, SyncError> {
        self.cx.policy()
    }

    /// Nested read entry; see [`SyncEngine::read`] for the contract
    ///
    /// # Errors
    /// Propagates formatter and host failures after unwinding the frame.
    pub fn read_slot(
        &mut self,
        slot: &mut Option<ProxyHandle>,
        backing: Option<&BackingHandle>,
    ) -> Result<(), SyncError> {
        let Some(backing) = backing else {
            if !self.cx.collecting() {
                *slot = None;
            }
            return Ok(());
        };

        let policy = self.cx.policy()?;
        if policy.collects_dependencies() {
            self.cx.record_dependency(backing);
        }

        let proxy = self.bridge.proxy_for(backing)?;
        *slot = Some(Arc::clone(&proxy));

        if self.cx.depth() >= policy.max_depth() {
            return Ok(());
        }
        if self.cx.is_visited(proxy.id()) {
            return Ok(());
        }
        self.cx.mark_visited(proxy.id());

        self.cx.enter_frame();
        let result = self.format_read(&proxy, backing);
        let unwound = self.cx.unwind_frame();
        result.and(unwound)
    }

    /// Nested write entry; see [`SyncEngine::write`] for the contract
    ///
    /// # Errors
    /// Propagates formatter and host failures after unwinding the frame.
    pub fn write_slot(
        &mut self,
        slot: &mut Option<BackingHandle>,
        proxy: Option<&ProxyHandle>,
    ) -> Result<(), SyncError> {
        let Some(proxy) = proxy else {
            if !self.cx.collecting() {
                *slot = None;
            }
            return Ok(());
        };

        let policy = self.cx.policy()?;
        let existing = self.bridge.backing_of(proxy);
        if policy.collects_dependencies() {
            if let Some(backing) = &existing {
                self.cx.record_dependency(backing);
            }
        }

        if self.cx.depth() >= policy.max_depth() {
            if !policy.collects_dependencies() {
                *slot = existing;
            }
            return Ok(());
        }

        self.cx.enter_frame();
        let result = self.write_frame(slot, proxy, existing, policy);
        let unwound = self.cx.unwind_frame();
        result.and(unwound)
    }

    fn format_read(&mut self, proxy: &ProxyHandle, backing: &BackingHandle) -> Result<(), SyncError> {
        let tag = self
            .bridge
            .logical_type(backing)
            .ok_or_else(|| SyncError::UnknownLogicalType(backing.id()))?;
        let formatter = self.formatters.resolve(self.bridge, tag)?;
        tracing::trace!(backing = %backing.id(), %tag, depth = self.cx.depth(), "format read");
        formatter.read(self, proxy, backing)
    }

    fn write_frame(
        &mut self,
        slot: &mut Option<BackingHandle>,
        proxy: &ProxyHandle,
        existing: Option<BackingHandle>,
        policy: SyncPolicy,
    ) -> Result<(), SyncError> {
        let target = if policy.collects_dependencies() {
            existing
        } else {
            let linked = match existing {
                Some(backing) => Some(backing),
                None => {
                    let created = match policy.child_mode() {
                        ChildProxyMode::None => None,
                        ChildProxyMode::Create => Some(self.bridge.create_backing(proxy)?),
                        ChildProxyMode::CreateWithUndo => {
                            Some(self.bridge.create_backing_with_undo(proxy)?)
                        }
                    };
                    if let Some(backing) = &created {
                        tracing::debug!(proxy = %proxy.id(), backing = %backing.id(), "materialized backing cell");
                    }
                    created
                }
            };
            slot.clone_from(&linked);
            linked
        };

        if self.cx.is_visited(proxy.id()) {
            return Ok(());
        }
        self.cx.mark_visited(proxy.id());

        let formatter = self.formatters.resolve(self.bridge, proxy.tag())?;
        tracing::trace!(proxy = %proxy.id(), tag = %proxy.tag(), depth = self.cx.depth(), "format write");
        formatter.write(self, target.as_ref(), proxy)
    }
}
