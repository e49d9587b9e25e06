//! Host capability seams
//!
//! Everything the sync engine and lookup emulator consume from the host but
//! do not reimplement:
//!
//! - [`HostBridge`]: proxy resolution, backing creation (plain and
//!   undo-recording), logical-type and field-layout resolution.
//! - [`Hierarchy`]: ordered enumeration of type-erased handles attached to a
//!   node, its children, or its ancestors.
//! - [`FieldLayout`]: the reflected field layout of a logical type.
//!
//! Implementations live with the host; `tether-test-utils` carries an
//! in-memory reference implementation for tests.

mod bridge;
mod error;
mod hierarchy;
mod layout;

pub use bridge::HostBridge;
pub use error::HostError;
pub use hierarchy::Hierarchy;
pub use layout::{FieldKind, FieldLayout, FieldSpec};
