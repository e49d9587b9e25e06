//! Synchronization policies
//!
//! A [`SyncPolicy`] is an immutable value object selecting traversal depth,
//! child-creation behavior, and collection-vs-mutation mode. The catalog is
//! closed: callers pick one of the named presets; only the engine itself can
//! construct arbitrary combinations.

use tether_model::StoreKind;

/// What to do when a written proxy has no backing cell yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildProxyMode {
    /// Leave the reference slot empty
    None,

    /// Create a backing cell through the host
    Create,

    /// Create a backing cell, recording the creation as an undoable step
    CreateWithUndo,
}

/// Immutable traversal configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPolicy {
    child_mode: ChildProxyMode,
    max_depth: usize,
    collect_dependencies: bool,
    pre_build: bool,
}

impl SyncPolicy {
    /// Copy exactly the root entity's direct fields, leaving referenced
    /// entities as opaque handles
    pub const ROOT_ONLY: Self = Self::custom(ChildProxyMode::None, 1, false, false);

    /// Copy every entity directly or indirectly referenced by the root,
    /// without creating missing backing cells
    pub const ALL: Self = Self::custom(ChildProxyMode::None, usize::MAX, false, false);

    /// Copy every reachable entity, creating missing backing cells as needed
    pub const ALL_WITH_CREATE: Self = Self::custom(ChildProxyMode::Create, usize::MAX, false, false);

    /// Copy every reachable entity, creating missing backing cells through
    /// the undo-recording creation path
    pub const ALL_WITH_CREATE_UNDO: Self =
        Self::custom(ChildProxyMode::CreateWithUndo, usize::MAX, false, false);

    /// Mutate nothing; gather the backing cells the root directly references
    pub const COLLECT_ROOT_DEPENDENCIES: Self = Self::custom(ChildProxyMode::None, 1, true, false);

    /// Root-only copy forced through the heap store
    ///
    /// The direct-field fast path may be unsafe at the moment this policy
    /// applies, so every copy addresses the runtime variable heap.
    pub const PRE_BUILD: Self = Self::custom(ChildProxyMode::None, 1, false, true);

    /// Produce the proxy/backing linkage without any data transfer
    pub const NO_COPY: Self = Self::custom(ChildProxyMode::None, 0, false, false);

    pub(crate) const fn custom(
        child_mode: ChildProxyMode,
        max_depth: usize,
        collect_dependencies: bool,
        pre_build: bool,
    ) -> Self {
        Self {
            child_mode,
            max_depth,
            collect_dependencies,
            pre_build,
        }
    }

    /// Child-materialization behavior on write
    #[inline]
    #[must_use]
    pub fn child_mode(&self) -> ChildProxyMode {
        self.child_mode
    }

    /// Depth at which recursion stops; `usize::MAX` means unbounded
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether this traversal only gathers referenced cells
    #[inline]
    #[must_use]
    pub fn collects_dependencies(&self) -> bool {
        self.collect_dependencies
    }

    /// Whether copies are forced through the heap store
    #[inline]
    #[must_use]
    pub fn is_pre_build(&self) -> bool {
        self.pre_build
    }

    /// Variable table formatters address under this policy
    #[inline]
    #[must_use]
    pub fn store_kind(&self) -> StoreKind {
        if self.collect_dependencies || self.pre_build {
            StoreKind::Heap
        } else {
            StoreKind::Published
        }
    }
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self::ROOT_ONLY
    }
}
