//! Testing utilities for the Tether workspace
//!
//! Reference in-memory implementations of the host capability seams, plus
//! small fixtures for building entity graphs in tests.

#![allow(missing_docs)]

mod host;
mod scene;

pub use host::{InMemoryHost, MapProxyState, UndoJournal, UndoStep};
pub use scene::SceneGraph;
