//! Convenient re-exports of commonly used types from reclayer.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use reclayer::prelude::*;
//! ```
//!
//! This provides access to:
//! - Record traits and conversions
//! - The store contract and store builders
//! - Query construction
//! - Error types

pub use reclayer_core::{
    record::{Record, RecordExt, IntoFields, ID_FIELD},
    store::{RecordStore, StoreBuilder},
    query::{Query, QueryBuilder, IntoQuery},
    error::{RecordStoreError, RecordStoreResult},
};
