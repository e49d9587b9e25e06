//! Traversal-scoped synchronization state
//!
//! One [`SyncContext`] lives inside the engine behind its gate lock. It is
//! installed at the start of a top-level call, threaded by `&mut` through
//! every nested entry, and torn down when that same call unwinds. The
//! visited set is non-empty only while the depth counter is positive and is
//! cleared exactly when depth returns to zero.

use crate::error::SyncError;
use crate::policy::SyncPolicy;
use std::collections::HashSet;
use tether_model::{BackingHandle, BackingId, ProxyId};

/// Outcome of one top-level traversal
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Backing cells recorded in collection mode, in encounter order,
    /// deduplicated per traversal; empty outside collection mode
    pub dependencies: Vec<BackingHandle>,

    /// Number of entities delegated to a field formatter
    pub formatted: usize,
}

#[derive(Debug, Default)]
pub(crate) struct SyncContext {
    policy: Option<SyncPolicy>,
    depth: usize,
    visited: HashSet<ProxyId>,
    deps: Vec<BackingHandle>,
    seen_deps: HashSet<BackingId>,
    formatted: usize,
}

impl SyncContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Install the policy for the traversal about to run
    pub(crate) fn install(&mut self, policy: SyncPolicy) {
        self.policy = Some(policy);
    }

    /// Active policy, or [`SyncError::InvalidConfiguration`] when a nested
    /// entry runs outside a top-level call
    pub(crate) fn policy(&self) -> Result<SyncPolicy, SyncError> {
        self.policy.ok_or(SyncError::InvalidConfiguration)
    }

    pub(crate) fn collecting(&self) -> bool {
        self.policy.is_some_and(|p| p.collects_dependencies())
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn is_visited(&self, id: ProxyId) -> bool {
        self.visited.contains(&id)
    }

    /// Mark an entity as handled in this traversal
    pub(crate) fn mark_visited(&mut self, id: ProxyId) {
        self.visited.insert(id);
        self.formatted += 1;
    }

    /// Record a referenced cell, once per traversal
    pub(crate) fn record_dependency(&mut self, backing: &BackingHandle) {
        if self.seen_deps.insert(backing.id()) {
            self.deps.push(BackingHandle::clone(backing));
        }
    }

    pub(crate) fn enter_frame(&mut self) {
        self.depth += 1;
    }

    /// Leave one recursion frame; clears the visited set when the outermost
    /// frame unwinds
    ///
    /// Runs on every exit path, error or not, so the context never stays
    /// stuck at a non-zero depth for subsequent unrelated calls.
    pub(crate) fn unwind_frame(&mut self) -> Result<(), SyncError> {
        match self.depth.checked_sub(1) {
            Some(depth) => {
                self.depth = depth;
                if depth == 0 {
                    self.visited.clear();
                }
                Ok(())
            }
            None => {
                self.visited.clear();
                Err(SyncError::DepthInvariantViolation)
            }
        }
    }

    /// Finish the top-level call: drain the report and reset everything
    pub(crate) fn teardown(&mut self) -> Result<SyncReport, SyncError> {
        let report = SyncReport {
            dependencies: std::mem::take(&mut self.deps),
            formatted: self.formatted,
        };
        self.seen_deps.clear();
        self.formatted = 0;
        self.policy = None;
        self.visited.clear();

        let balanced = self.depth == 0;
        self.depth = 0;
        if balanced {
            Ok(report)
        } else {
            Err(SyncError::DepthInvariantViolation)
        }
    }
}
