//! Type-erased backing cells

use crate::ids::BackingId;
use crate::store::VariableStore;
use crate::tag::{TypeTag, TYPE_TAG_KEY};
use crate::value::{Value, ValueKind};
use parking_lot::RwLock;
use std::sync::Arc;

/// Selects which of a cell's two variable tables an operation addresses
///
/// `Published` is the direct-field table the normal editor-time path uses;
/// `Heap` is the runtime variable heap. The type tag always lives in the
/// heap table regardless of which table a traversal copies through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Runtime variable heap
    Heap,

    /// Direct-field fast path
    Published,
}

/// A type-erased runtime cell holding an entity's actual state
///
/// Owned by the host hierarchy; the sync engine reads, writes, and creates
/// cells but never destroys them.
#[derive(Debug)]
pub struct Backing {
    id: BackingId,
    heap: RwLock<VariableStore>,
    published: RwLock<VariableStore>,
}

/// Shared handle to a backing cell
pub type BackingHandle = Arc<Backing>;

impl Backing {
    /// Create an untagged cell with empty stores
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: BackingId::new(),
            heap: RwLock::new(VariableStore::new()),
            published: RwLock::new(VariableStore::new()),
        }
    }

    /// Create a cell whose heap carries `tag` under the reserved key
    #[must_use]
    pub fn with_tag(tag: TypeTag) -> Self {
        let cell = Self::new();
        cell.heap.write().set(TYPE_TAG_KEY, Value::Int(tag.0));
        cell
    }

    /// Cell identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> BackingId {
        self.id
    }

    /// Logical type tag, if this cell is a recognized typed entity
    #[must_use]
    pub fn type_tag(&self) -> Option<TypeTag> {
        let heap = self.heap.read();
        match heap.get(TYPE_TAG_KEY) {
            Some(Value::Int(raw)) => Some(TypeTag(*raw)),
            _ => None,
        }
    }

    /// Value stored under `key` in the selected table
    #[must_use]
    pub fn get(&self, kind: StoreKind, key: &str) -> Option<Value> {
        self.table(kind).read().get(key).cloned()
    }

    /// Kind of the value stored under `key` in the selected table
    #[must_use]
    pub fn kind_of(&self, kind: StoreKind, key: &str) -> Option<ValueKind> {
        self.table(kind).read().kind_of(key)
    }

    /// Store `value` under `key` in the selected table
    pub fn set(&self, kind: StoreKind, key: impl Into<String>, value: Value) {
        self.table(kind).write().set(key, value);
    }

    /// Snapshot of the selected table
    #[must_use]
    pub fn snapshot(&self, kind: StoreKind) -> VariableStore {
        self.table(kind).read().clone()
    }

    fn table(&self, kind: StoreKind) -> &RwLock<VariableStore> {
        match kind {
            StoreKind::Heap => &self.heap,
            StoreKind::Published => &self.published,
        }
    }
}

impl Default for Backing {
    fn default() -> Self {
        Self::new()
    }
}
