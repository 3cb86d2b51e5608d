//! A thin typed record store abstraction with query-by-example semantics.
//!
//! This crate is the core of the reclayer project and provides:
//!
//! - **Record traits** ([`record`]) - Core traits for defining and serializing records
//! - **Query-by-example** ([`query`]) - Scalar field-equality queries and their builders
//! - **Store contract** ([`store`]) - The generic CRUD trait backends implement
//! - **Error handling** ([`error`]) - The shared error type and result alias
//!
//! # Example
//!
//! ```ignore
//! use reclayer::{record::Record, store::RecordStore, query::Query};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Tag {
//!     pub id: i64,
//!     pub label: String,
//! }
//!
//! impl Record for Tag {
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//!
//!     fn collection_name() -> &'static str {
//!         "tags"
//!     }
//! }
//!
//! fn first_red<S: RecordStore<Tag>>(store: &S) -> reclayer::error::RecordStoreResult<Option<Tag>> {
//!     store.read_one(&Query::builder().eq("label", "red").build()?)
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as reclayer_core;

pub mod error;
pub mod query;
pub mod record;
pub mod store;
