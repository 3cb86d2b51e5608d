//! In-memory storage implementation of the record store contract.
//!
//! Records are kept as BSON field maps in a single ordered `Vec` guarded by a read-write lock.

use std::{fmt, marker::PhantomData, sync::Arc};

use bson::Document;
use parking_lot::RwLock;
use tracing::{debug, trace};

use reclayer_core::{
    error::{RecordStoreError, RecordStoreResult},
    query::Query,
    record::{ID_FIELD, Record, RecordExt, as_integer},
    store::{RecordStore, StoreBuilder},
};

use crate::evaluator::RecordMatcher;

/// Thread-safe in-memory record store.
///
/// All records of type `T` live in one ordered sequence of field maps, in insertion order.
/// Every operation is a linear scan; there is no indexing.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state. Clones share the same
/// underlying collection.
///
/// # Example
///
/// ```ignore
/// use reclayer_memory::InMemoryStore;
/// use reclayer::prelude::*;
///
/// let store = InMemoryStore::<Product>::new();
/// store.create(product)?;
///
/// let found = store.read_one(&Query::by_id(product_id))?;
/// assert!(found.is_some());
/// ```
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<Vec<Document>>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> InMemoryStore<T> {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty store with room for `capacity` records before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::with_capacity(capacity))),
            _marker: PhantomData,
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    pub fn builder() -> InMemoryStoreBuilder<T> {
        InMemoryStoreBuilder::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Returns a snapshot of the stored field maps, in insertion order.
    pub fn records(&self) -> Vec<Document> {
        self.records.read().clone()
    }

    /// Removes every record.
    pub fn reset(&self) {
        let mut records = self.records.write();
        debug!(collection = T::collection_name(), removed = records.len(), "reset store");
        records.clear();
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            _marker: PhantomData,
        }
    }
}

impl<T: Record> fmt::Debug for InMemoryStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("collection", &T::collection_name())
            .field("records", &self.records.read().len())
            .finish()
    }
}

fn stored_id(record: &Document) -> Option<i64> {
    record.get(ID_FIELD).and_then(as_integer)
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    fn create(&self, record: T) -> RecordStoreResult<()> {
        let id = record.id();
        let fields = record.to_fields()?;
        let mut records = self.records.write();

        if records.iter().any(|stored| stored_id(stored) == Some(id)) {
            return Err(RecordStoreError::DuplicateKey {
                id,
                collection: T::collection_name().to_string(),
            });
        }

        records.push(fields);
        debug!(collection = T::collection_name(), id, "created record");

        Ok(())
    }

    fn read_one(&self, query: &Query) -> RecordStoreResult<Option<T>> {
        let records = self.records.read();
        let matcher = RecordMatcher::new(query);

        trace!(collection = T::collection_name(), ?query, "reading one record");

        matcher
            .position(&records)
            .map(|index| T::from_fields(records[index].clone()))
            .transpose()
    }

    fn read_many(&self, query: &Query) -> RecordStoreResult<Vec<T>> {
        let records = self.records.read();
        let matcher = RecordMatcher::new(query);

        trace!(collection = T::collection_name(), ?query, "reading records");

        matcher
            .filter(&records)
            .map(|record| T::from_fields(record.clone()))
            .collect()
    }

    fn update(&self, record: T) -> RecordStoreResult<()> {
        let id = record.id();
        let fields = record.to_fields()?;
        let mut records = self.records.write();

        match records
            .iter_mut()
            .find(|stored| stored_id(stored) == Some(id))
        {
            Some(stored) => {
                *stored = fields;
                debug!(collection = T::collection_name(), id, "updated record");
            }
            None => debug!(collection = T::collection_name(), id, "no record to update"),
        }

        Ok(())
    }

    fn delete(&self, query: &Query) -> RecordStoreResult<()> {
        let mut records = self.records.write();
        let matcher = RecordMatcher::new(query);
        let before = records.len();

        records.retain(|record| !matcher.matches(record));

        debug!(
            collection = T::collection_name(),
            removed = before - records.len(),
            "deleted records"
        );

        Ok(())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use reclayer_memory::InMemoryStore;
/// use reclayer::store::StoreBuilder;
///
/// let store = InMemoryStore::<Product>::builder()
///     .with_capacity(64)
///     .build()?;
/// ```
pub struct InMemoryStoreBuilder<T: Record> {
    capacity: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> InMemoryStoreBuilder<T> {
    /// Reserves room for `capacity` records up front.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl<T: Record> Default for InMemoryStoreBuilder<T> {
    fn default() -> Self {
        Self {
            capacity: 0,
            _marker: PhantomData,
        }
    }
}

impl<T: Record> fmt::Debug for InMemoryStoreBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStoreBuilder")
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: Record> StoreBuilder for InMemoryStoreBuilder<T> {
    type Record = T;
    type Store = InMemoryStore<T>;

    /// Builds and returns a new, empty [`InMemoryStore`]. This always succeeds.
    fn build(self) -> RecordStoreResult<Self::Store> {
        Ok(InMemoryStore::with_capacity(self.capacity))
    }
}
