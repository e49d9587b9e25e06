//! Typed proxy wrappers
//!
//! A [`Proxy`] is the user-facing side of an entity. Its concrete state type
//! is erased behind [`ProxyState`], which exposes tag identity and generic
//! field access; application code recovers the concrete type through
//! [`ProxyState::as_any`].

use crate::error::ModelError;
use crate::ids::ProxyId;
use crate::tag::TypeTag;
use crate::value::Value;
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;

/// A field value seen from the typed side
///
/// Entity-typed fields hold the referenced entity's proxy id rather than a
/// shared pointer, so cyclic entity graphs stay collectable.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Plain value field
    Value(Value),

    /// Entity reference field, `None` when cleared
    Entity(Option<ProxyId>),
}

/// Erased typed state of an entity
pub trait ProxyState: Any + Send + Sync {
    /// Tag of this state's logical type
    fn type_tag(&self) -> TypeTag;

    /// Current value of the field named `key`
    fn get(&self, key: &str) -> Option<FieldValue>;

    /// Overwrite the field named `key`
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownField`] when the state has no such field.
    fn set(&mut self, key: &str, value: FieldValue) -> Result<(), ModelError>;

    /// Upcast for typed downcasting
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Strongly-typed, user-visible wrapper of an entity
pub struct Proxy {
    id: ProxyId,
    tag: TypeTag,
    state: RwLock<Box<dyn ProxyState>>,
}

impl std::fmt::Debug for Proxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

/// Shared handle to a proxy
pub type ProxyHandle = Arc<Proxy>;

impl Proxy {
    /// Wrap `state`, capturing its tag
    #[must_use]
    pub fn new(state: Box<dyn ProxyState>) -> Self {
        let tag = state.type_tag();
        Self {
            id: ProxyId::new(),
            tag,
            state: RwLock::new(state),
        }
    }

    /// Proxy identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> ProxyId {
        self.id
    }

    /// Tag of the wrapped logical type
    #[inline]
    #[must_use]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Current value of the field named `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.state.read().get(key)
    }

    /// Overwrite the field named `key`
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownField`] when the state has no such field.
    pub fn set(&self, key: &str, value: FieldValue) -> Result<(), ModelError> {
        self.state.write().set(key, value)
    }

    /// Run `f` against the concrete state type, if it is a `T`
    pub fn with_state<T: ProxyState, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let state = self.state.read();
        state.as_any().downcast_ref::<T>().map(f)
    }

    /// Run `f` against the concrete state type mutably, if it is a `T`
    pub fn with_state_mut<T: ProxyState, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut state = self.state.write();
        state.as_any_mut().downcast_mut::<T>().map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: i64,
    }

    impl ProxyState for Counter {
        fn type_tag(&self) -> TypeTag {
            TypeTag(1)
        }

        fn get(&self, key: &str) -> Option<FieldValue> {
            (key == "count").then(|| FieldValue::Value(Value::Int(self.count)))
        }

        fn set(&mut self, key: &str, value: FieldValue) -> Result<(), ModelError> {
            match (key, value) {
                ("count", FieldValue::Value(Value::Int(n))) => {
                    self.count = n;
                    Ok(())
                }
                ("count", _) => Err(ModelError::FieldKindMismatch {
                    key: key.to_string(),
                }),
                _ => Err(ModelError::UnknownField {
                    key: key.to_string(),
                }),
            }
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn proxy_captures_state_tag() {
        let proxy = Proxy::new(Box::new(Counter { count: 0 }));
        assert_eq!(proxy.tag(), TypeTag(1));
    }

    #[test]
    fn field_access_through_wrapper() {
        let proxy = Proxy::new(Box::new(Counter { count: 4 }));
        assert_eq!(proxy.get("count"), Some(FieldValue::Value(Value::Int(4))));

        proxy.set("count", FieldValue::Value(Value::Int(9))).unwrap();
        assert_eq!(proxy.get("count"), Some(FieldValue::Value(Value::Int(9))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let proxy = Proxy::new(Box::new(Counter { count: 0 }));
        let result = proxy.set("missing", FieldValue::Entity(None));
        assert!(matches!(result, Err(ModelError::UnknownField { .. })));
    }

    #[test]
    fn downcast_reaches_concrete_state() {
        let proxy = Proxy::new(Box::new(Counter { count: 7 }));
        let seen = proxy.with_state::<Counter, _>(|c| c.count);
        assert_eq!(seen, Some(7));

        proxy.with_state_mut::<Counter, _>(|c| c.count = 8);
        assert_eq!(proxy.get("count"), Some(FieldValue::Value(Value::Int(8))));
    }
}
