//! Tether entity model
//!
//! Two representations of the same runtime entity:
//!
//! - [`Proxy`]: the strongly-typed, user-facing wrapper application code
//!   interacts with, exposing its fields through [`ProxyState`].
//! - [`Backing`]: the type-erased runtime cell whose state lives in
//!   string-keyed [`VariableStore`]s understood only by a generic runtime.
//!
//! The link between the two worlds is the type-tag convention: a reserved
//! heap key ([`TYPE_TAG_KEY`]) maps to an integer [`TypeTag`] identifying the
//! logical type of the entity that owns the backing cell.
//!
//! # Example
//!
//! ```rust,ignore
//! use tether_model::{Backing, TypeTag, Value};
//!
//! let cell = Backing::with_tag(TypeTag(7));
//! assert_eq!(cell.type_tag(), Some(TypeTag(7)));
//! ```

// Core modules
mod backing;
mod error;
mod ids;
mod proxy;
mod store;
mod tag;
mod value;

// Re-exports
pub use backing::{Backing, BackingHandle, StoreKind};
pub use error::ModelError;
pub use ids::{BackingId, NodeId, ProxyId};
pub use proxy::{FieldValue, Proxy, ProxyHandle, ProxyState};
pub use store::VariableStore;
pub use tag::{TaggedType, TypeTag, TYPE_TAG_KEY};
pub use value::{Value, ValueKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
