//! In-memory record storage backend for reclayer.
//!
//! This crate provides a thread-safe, in-memory implementation of the `RecordStore` trait.
//! It is meant for development, testing and small embedded use.
//!
//! # Features
//!
//! - **Ordered storage** - Records are kept in insertion order as BSON field maps
//! - **Query-by-example** - Linear-scan matching with numeric normalization
//! - **Shared handles** - Clones of a store see the same collection
//!
//! # Quick Start
//!
//! ```ignore
//! use reclayer::{prelude::*, memory::InMemoryStore};
//!
//! fn main() -> RecordStoreResult<()> {
//!     let store = InMemoryStore::<Product>::builder().build()?;
//!
//!     store.create(Product::new(1, "apple pie", 4.5)?)?;
//!
//!     let pies = store.read_many(&Query::builder().eq("price", 4.5).build()?)?;
//!     assert_eq!(pies.len(), 1);
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as reclayer_memory;

mod evaluator;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
