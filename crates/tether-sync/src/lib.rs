//! Tether synchronization engine
//!
//! Copies state between the typed proxy and type-erased backing
//! representations of a graph of interlinked entities: policy-configured,
//! cycle-safe, depth-limited, with an optional collection-only mode that
//! enumerates referenced entities without mutating anything.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tether_sync::{SyncEngine, SyncPolicy};
//!
//! let engine = SyncEngine::new(bridge);
//!
//! // Populate the whole reachable graph of proxies from their cells.
//! let mut root = None;
//! engine.read(SyncPolicy::ALL, &mut root, Some(&cell))?;
//!
//! // Enumerate the cells the root directly references, touching nothing.
//! let report = engine.read(SyncPolicy::COLLECT_ROOT_DEPENDENCIES, &mut root, Some(&cell))?;
//! for dep in report.dependencies {
//!     println!("depends on {}", dep.id());
//! }
//! ```
//!
//! One top-level [`SyncEngine::read`] or [`SyncEngine::write`] is atomic with
//! respect to any other concurrently triggered traversal; nested entity
//! fields reenter the engine through the [`Traversal`] view their
//! [`FieldFormatter`] receives, sharing one depth counter and visited set.

// Core modules
mod context;
mod engine;
mod error;
mod formatter;
mod policy;

// Re-exports
pub use context::SyncReport;
pub use engine::{SyncEngine, Traversal};
pub use error::SyncError;
pub use formatter::{FieldFormatter, FormatterRegistry, LayoutFormatter};
pub use policy::{ChildProxyMode, SyncPolicy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
