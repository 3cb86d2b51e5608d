//! Query-by-example construction for record stores.
//!
//! A [`Query`] is an ordered map of field name to expected scalar value. A record matches a
//! query when it holds every queried field with an equal value; fields the query does not
//! mention are ignored, and the empty query matches every record.
//!
//! # Query Building
//!
//! ```ignore
//! use reclayer::query::Query;
//!
//! let query = Query::builder()
//!     .eq("price", 2.99)
//!     .eq("name", "apple")
//!     .build()?;
//! ```
//!
//! Untyped maps convert through [`IntoQuery`], which rejects anything that is not a map of
//! scalars with [`RecordStoreError::InvalidArgument`].

use bson::{Bson, Document};
use serde_json::{Map, Value};

use crate::{
    error::{RecordStoreError, RecordStoreResult},
    record::{ID_FIELD, IntoFields, ensure_scalar_fields, json_kind_name, kind_name},
};

/// A query-by-example: every field must be present in a record with an equal value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    fields: Document,
}

impl Query {
    /// Creates an empty query, which matches every record.
    pub fn new() -> Self {
        Query { fields: Document::new() }
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// Creates a query matching the record with the given identifier.
    pub fn by_id(id: i64) -> Self {
        let mut fields = Document::new();
        fields.insert(ID_FIELD, id);

        Query { fields }
    }

    /// Creates a query from an untyped field map.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidArgument`] if a value is not a scalar.
    pub fn from_fields(fields: Document) -> RecordStoreResult<Self> {
        ensure_scalar_fields(&fields, "query")?;

        Ok(Query { fields })
    }

    /// Returns `true` if the query has no fields and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields in the query.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the expected value of a field, if the query constrains it.
    pub fn get(&self, field: &str) -> Option<&Bson> {
        self.fields.get(field)
    }

    /// Iterates over the query's fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Bson)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }

    /// Returns the underlying field map.
    pub fn as_document(&self) -> &Document {
        &self.fields
    }
}

/// Fluent builder for [`Query`].
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    fields: Document,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { fields: Document::new() }
    }

    /// Requires `field` to equal `value`. A later call for the same field replaces the
    /// earlier value.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Builds and returns the final query.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidArgument`] if a value is not a scalar.
    pub fn build(self) -> RecordStoreResult<Query> {
        Query::from_fields(self.fields)
    }
}

/// Conversion trait for everything a caller may hand over as a query.
pub trait IntoQuery {
    /// Converts this value into a [`Query`].
    fn into_query(self) -> RecordStoreResult<Query>;
}

impl IntoQuery for Query {
    fn into_query(self) -> RecordStoreResult<Query> {
        Ok(self)
    }
}

impl IntoQuery for &Query {
    fn into_query(self) -> RecordStoreResult<Query> {
        Ok(self.clone())
    }
}

impl IntoQuery for Document {
    fn into_query(self) -> RecordStoreResult<Query> {
        Query::from_fields(self)
    }
}

impl IntoQuery for Bson {
    fn into_query(self) -> RecordStoreResult<Query> {
        match self {
            Bson::Document(fields) => Query::from_fields(fields),
            other => Err(RecordStoreError::invalid_argument(format!(
                "'query' should be a map, got {}",
                kind_name(&other)
            ))),
        }
    }
}

impl IntoQuery for Map<String, Value> {
    fn into_query(self) -> RecordStoreResult<Query> {
        Query::from_fields(self.into_fields()?)
    }
}

impl IntoQuery for Value {
    fn into_query(self) -> RecordStoreResult<Query> {
        match self {
            Value::Object(map) => map.into_query(),
            other => Err(RecordStoreError::invalid_argument(format!(
                "'query' should be a map, got {}",
                json_kind_name(&other)
            ))),
        }
    }
}
