//! String-keyed variable store
//!
//! The logical key/value contract the sync engine and the lookup emulator
//! rely on. No byte layout is defined here; a store is an ordered map from
//! variable name to [`Value`].

use crate::value::{Value, ValueKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from variable name to boxed value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableStore {
    vars: IndexMap<String, Value>,
}

impl VariableStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if present
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Kind of the value stored under `key`, if present
    #[inline]
    #[must_use]
    pub fn kind_of(&self, key: &str) -> Option<ValueKind> {
        self.vars.get(key).map(Value::kind)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.vars.insert(key.into(), value);
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.vars.shift_remove(key)
    }

    /// Whether `key` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the store holds no variables
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}
