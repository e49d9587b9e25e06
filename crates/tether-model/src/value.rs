//! Boxed values stored in a backing cell's variable stores

use crate::ids::BackingId;
use serde::{Deserialize, Serialize};

/// A single boxed value in a variable store
///
/// Entity references on the erased side are carried as [`Value::Ref`] holding
/// the referenced cell's id, or `None` for a cleared reference. Aggregates are
/// plain [`Value::List`]s; richer aggregate encodings are the concern of the
/// per-field codecs supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Floating point
    Float(f64),

    /// UTF-8 string
    Str(String),

    /// Reference to another backing cell, `None` when cleared
    Ref(Option<BackingId>),

    /// Ordered aggregate of values
    List(Vec<Value>),
}

impl Value {
    /// Kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Ref(_) => ValueKind::Ref,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Referenced cell id, if this is a non-empty reference
    #[inline]
    #[must_use]
    pub fn as_ref_id(&self) -> Option<BackingId> {
        match self {
            Self::Ref(id) => *id,
            _ => None,
        }
    }
}

/// Value kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Floating point
    Float,
    /// UTF-8 string
    Str,
    /// Entity reference
    Ref,
    /// Ordered aggregate
    List,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Ref => "ref",
            Self::List => "list",
        };
        f.write_str(name)
    }
}
