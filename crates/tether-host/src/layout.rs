//! Reflected field layouts
//!
//! A [`FieldLayout`] is the ordered list of fields a logical type declares.
//! Layout order is the order formatters visit fields, so it must be stable
//! for a given type to keep traversal output reproducible.

use serde::{Deserialize, Serialize};
use tether_model::ValueKind;

/// Kind of a declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Plain value field of the given kind
    Value(ValueKind),

    /// Reference to another typed entity
    Entity,
}

/// One declared field of a logical type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Variable name the field is stored under
    pub key: String,

    /// Declared kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a plain value field
    #[must_use]
    pub fn value(key: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            key: key.into(),
            kind: FieldKind::Value(kind),
        }
    }

    /// Declare an entity reference field
    #[must_use]
    pub fn entity(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: FieldKind::Entity,
        }
    }
}

/// Ordered field layout of a logical type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    fields: Vec<FieldSpec>,
}

impl FieldLayout {
    /// Build a layout from fields in declaration order
    #[must_use]
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Fields in declaration order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of declared fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the layout declares no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_preserves_declaration_order() {
        let layout = FieldLayout::new(vec![
            FieldSpec::value("hp", ValueKind::Int),
            FieldSpec::entity("target"),
            FieldSpec::value("name", ValueKind::Str),
        ]);

        let keys: Vec<_> = layout.fields().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["hp", "target", "name"]);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn field_constructors_set_kind() {
        assert_eq!(
            FieldSpec::value("hp", ValueKind::Int).kind,
            FieldKind::Value(ValueKind::Int)
        );
        assert_eq!(FieldSpec::entity("next").kind, FieldKind::Entity);
    }
}
