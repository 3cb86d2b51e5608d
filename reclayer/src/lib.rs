//! Main reclayer crate providing a unified interface for typed record storage.
//!
//! This crate is the primary entry point for users of the reclayer framework.
//! It re-exports the core types and functionality from the sub-crates and provides
//! access to the available storage backends.
//!
//! # Features
//!
//! - **Typed records** - Define records with Serde and keep their invariants in `Deserialize`
//! - **Query-by-example** - Select records by field equality over scalar values
//! - **Swappable backends** - Code against `RecordStore<T>`, statically or behind `dyn`
//!
//! # Quick Start
//!
//! ```ignore
//! use reclayer::{prelude::*, memory::InMemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Tag {
//!     pub id: i64,
//!     pub label: String,
//! }
//!
//! impl Record for Tag {
//!     fn id(&self) -> i64 { self.id }
//!     fn collection_name() -> &'static str { "tags" }
//! }
//!
//! fn main() -> RecordStoreResult<()> {
//!     let store = InMemoryStore::<Tag>::builder().build()?;
//!
//!     store.create(Tag { id: 1, label: "red".to_string() })?;
//!     store.create(Tag { id: 2, label: "blue".to_string() })?;
//!
//!     let red = store.read_one(&Query::builder().eq("label", "red").build()?)?;
//!     println!("Found: {:?}", red);
//!
//!     store.delete(&Query::by_id(2))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Dynamic Dispatch
//!
//! The store contract is object safe, so a backend chosen at runtime can be boxed:
//!
//! ```ignore
//! let store: Box<dyn RecordStore<Tag>> = Box::new(InMemoryStore::<Tag>::new());
//! store.create(Tag { id: 3, label: "green".to_string() })?;
//! ```
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage for development and testing

pub mod prelude;

pub use reclayer_core::{error, query, record, store};

// Re-export serialization crates for convenience
pub use bson;
pub use serde_json;

/// In-memory storage backend implementations.
pub mod memory {
    pub use reclayer_memory::{InMemoryStore, InMemoryStoreBuilder};
}
