//! The record store contract.
//!
//! [`RecordStore<T>`] is the generic data-access abstraction every backend implements:
//! create, read-one, read-many, update and delete over records of type `T`, selected with a
//! query-by-example ([`Query`]). Backends keep records in their untyped field-map form and
//! reconstruct `T` on the way out.
//!
//! # Policies
//!
//! - `create` rejects a record whose identifier is already stored with
//!   [`RecordStoreError::DuplicateKey`](crate::error::RecordStoreError::DuplicateKey) and leaves
//!   the collection untouched.
//! - `read_one` and `update` act on the first match in insertion order; `read_many` and `delete`
//!   act on every match, keeping insertion order.
//! - `update` and `delete` are no-ops when nothing matches.
//! - Malformed records or queries fail with
//!   [`RecordStoreError::InvalidArgument`](crate::error::RecordStoreError::InvalidArgument);
//!   backing-store failures surface as
//!   [`RecordStoreError::Store`](crate::error::RecordStoreError::Store).
//!
//! # Example
//!
//! ```ignore
//! use reclayer::prelude::*;
//!
//! fn cheapest_first<S: RecordStore<Product>>(store: &S) -> RecordStoreResult<Vec<Product>> {
//!     store.read_many(&Query::builder().eq("price", 2.99).build()?)
//! }
//! ```

use std::{fmt::Debug, sync::Arc};

use crate::{error::RecordStoreResult, query::Query, record::Record};

/// Abstract interface for record storage backends.
///
/// Implementations must be thread-safe (`Send + Sync`); the exact locking model is
/// implementation-specific. The trait is object safe, so `Box<dyn RecordStore<T>>` works
/// wherever a concrete store does.
pub trait RecordStore<T: Record>: Send + Sync + Debug {
    /// Inserts a new record at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a record with the same identifier is already stored.
    fn create(&self, record: T) -> RecordStoreResult<()>;

    /// Returns the first record matching `query`, or `None` if nothing matches.
    fn read_one(&self, query: &Query) -> RecordStoreResult<Option<T>>;

    /// Returns every record matching `query`, in insertion order.
    fn read_many(&self, query: &Query) -> RecordStoreResult<Vec<T>>;

    /// Replaces the first stored record with the same identifier as `record`.
    ///
    /// Does nothing if no stored record has that identifier.
    fn update(&self, record: T) -> RecordStoreResult<()>;

    /// Removes every record matching `query`, keeping the remaining records in order.
    fn delete(&self, query: &Query) -> RecordStoreResult<()>;
}

impl<T, S> RecordStore<T> for &S
where
    T: Record,
    S: RecordStore<T> + ?Sized,
{
    fn create(&self, record: T) -> RecordStoreResult<()> {
        (**self).create(record)
    }

    fn read_one(&self, query: &Query) -> RecordStoreResult<Option<T>> {
        (**self).read_one(query)
    }

    fn read_many(&self, query: &Query) -> RecordStoreResult<Vec<T>> {
        (**self).read_many(query)
    }

    fn update(&self, record: T) -> RecordStoreResult<()> {
        (**self).update(record)
    }

    fn delete(&self, query: &Query) -> RecordStoreResult<()> {
        (**self).delete(query)
    }
}

impl<T, S> RecordStore<T> for Box<S>
where
    T: Record,
    S: RecordStore<T> + ?Sized,
{
    fn create(&self, record: T) -> RecordStoreResult<()> {
        (**self).create(record)
    }

    fn read_one(&self, query: &Query) -> RecordStoreResult<Option<T>> {
        (**self).read_one(query)
    }

    fn read_many(&self, query: &Query) -> RecordStoreResult<Vec<T>> {
        (**self).read_many(query)
    }

    fn update(&self, record: T) -> RecordStoreResult<()> {
        (**self).update(record)
    }

    fn delete(&self, query: &Query) -> RecordStoreResult<()> {
        (**self).delete(query)
    }
}

impl<T, S> RecordStore<T> for Arc<S>
where
    T: Record,
    S: RecordStore<T> + ?Sized,
{
    fn create(&self, record: T) -> RecordStoreResult<()> {
        (**self).create(record)
    }

    fn read_one(&self, query: &Query) -> RecordStoreResult<Option<T>> {
        (**self).read_one(query)
    }

    fn read_many(&self, query: &Query) -> RecordStoreResult<Vec<T>> {
        (**self).read_many(query)
    }

    fn update(&self, record: T) -> RecordStoreResult<()> {
        (**self).update(record)
    }

    fn delete(&self, query: &Query) -> RecordStoreResult<()> {
        (**self).delete(query)
    }
}

/// Factory trait for creating record store instances.
pub trait StoreBuilder {
    /// The record type the built store holds.
    type Record: Record;
    /// The store this builder produces.
    type Store: RecordStore<Self::Record>;

    /// Builds the store.
    fn build(self) -> RecordStoreResult<Self::Store>;
}
