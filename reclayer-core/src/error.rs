//! Error types and result types for record store operations.
//!
//! Every layer of the stack (entity validation, record stores, use-cases) reports failures
//! through [`RecordStoreError`]. Use [`RecordStoreResult<T>`] as the return type for
//! fallible operations.

use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a record store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordStoreError {
    /// A field invariant of an entity was violated, either on direct construction or while
    /// reconstructing the entity from a stored record.
    #[error("Validation error: {0}")]
    Validation(String),
    /// A record or query with the wrong shape was passed to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A record with the given identifier already exists in the collection.
    #[error("Record {id} already exists in collection {collection}")]
    DuplicateKey {
        /// Identifier of the rejected record.
        id: i64,
        /// Name of the collection the record was written to.
        collection: String,
    },
    /// The backing store failed.
    #[error("Store error: {0}")]
    Store(String),
}

impl RecordStoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        RecordStoreError::Validation(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RecordStoreError::InvalidArgument(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        RecordStoreError::Store(message.into())
    }
}

/// A specialized `Result` type for record store operations.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_id_and_collection() {
        let err = RecordStoreError::DuplicateKey { id: 7, collection: "products".to_string() };

        assert_eq!(err.to_string(), "Record 7 already exists in collection products");
    }

    #[test]
    fn constructors_pick_the_matching_variant() {
        assert_eq!(
            RecordStoreError::validation("bad"),
            RecordStoreError::Validation("bad".to_string())
        );
        assert_eq!(
            RecordStoreError::invalid_argument("bad"),
            RecordStoreError::InvalidArgument("bad".to_string())
        );
        assert_eq!(RecordStoreError::store("down").to_string(), "Store error: down");
    }
}
