//! Type-tag convention
//!
//! A backing cell advertises its logical type through a reserved heap key:
//! [`TYPE_TAG_KEY`] maps to `Value::Int(tag)`. Absence of the key, or a
//! value of any other kind, means the cell is not a recognized typed entity.

use serde::{Deserialize, Serialize};

/// Reserved heap key holding a cell's logical type tag
pub const TYPE_TAG_KEY: &str = "__tether_type_id";

/// Integer identifying a logical entity type, stable for the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTag(pub i64);

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compile-time type tag for a proxy state type
///
/// Implemented by every typed entity's state type so queries can be written
/// against the Rust type instead of a raw integer.
pub trait TaggedType {
    /// The registered tag for this logical type
    fn type_tag() -> TypeTag;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_display() {
        assert_eq!(TypeTag(42).to_string(), "#42");
    }

    #[test]
    fn tagged_type_through_impl() {
        struct Door;
        impl TaggedType for Door {
            fn type_tag() -> TypeTag {
                TypeTag(9)
            }
        }

        assert_eq!(Door::type_tag(), TypeTag(9));
    }
}
