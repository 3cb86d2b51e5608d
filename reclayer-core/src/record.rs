//! Core traits and helpers for record representation and serialization.
//!
//! A record is the store-level form of an entity: an ordered map from field name to scalar
//! value (a [`bson::Document`]). Entities opt in by implementing [`Record`]; the blanket
//! [`RecordExt`] impl then converts them to and from that map, and to and from JSON.

use bson::{Bson, Document, ser::serialize_to_bson};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, from_value, to_value};

use crate::error::{RecordStoreError, RecordStoreResult};

/// Name of the field every stored record is keyed by.
pub const ID_FIELD: &str = "id";

/// Core trait that every record kept in a record store must implement.
///
/// The serialized form of a record must be a map holding only scalar values (integers, floats,
/// strings and booleans) and an integer [`ID_FIELD`] equal to [`Record::id`].
///
/// Deserialization is how a store reconstructs a typed record on read, so a type with field
/// invariants should enforce them in its `Deserialize` impl (for example with
/// `#[serde(try_from = "...")]`).
///
/// # Example
///
/// ```ignore
/// use reclayer::record::Record;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Tag {
///     pub id: i64,
///     pub label: String,
/// }
///
/// impl Record for Tag {
///     fn id(&self) -> i64 {
///         self.id
///     }
///
///     fn collection_name() -> &'static str {
///         "tags"
///     }
/// }
/// ```
pub trait Record: Serialize + DeserializeOwned + Send + Sync + Clone + 'static {
    /// Returns this record's unique identifier.
    fn id(&self) -> i64;

    /// Returns the name of the collection this record belongs to.
    ///
    /// Used to label log events and errors.
    fn collection_name() -> &'static str;
}

/// Extension trait providing conversions between records and their untyped forms.
///
/// This trait is automatically implemented for all types that implement [`Record`].
pub trait RecordExt: Record {
    /// Serializes this record into its store-level field map.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidArgument`] if the record does not serialize to a map
    /// of scalars with an integer `id` field.
    fn to_fields(&self) -> RecordStoreResult<Document>;

    /// Reconstructs a record from a field map.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Validation`] if a field is missing, has the wrong kind, or
    /// violates one of the record's invariants.
    fn from_fields(fields: Document) -> RecordStoreResult<Self>;

    /// Converts this record to a JSON value.
    fn to_json(&self) -> RecordStoreResult<Value>;

    /// Reconstructs a record from a JSON value, with the same error policy as
    /// [`RecordExt::from_fields`].
    fn from_json(value: Value) -> RecordStoreResult<Self>;
}

impl<R: Record> RecordExt for R {
    fn to_fields(&self) -> RecordStoreResult<Document> {
        let fields = match serialize_to_bson(self) {
            Ok(Bson::Document(fields)) => fields,
            Ok(other) => {
                return Err(RecordStoreError::invalid_argument(format!(
                    "record should serialize to a map, got {}",
                    kind_name(&other)
                )));
            }
            Err(err) => return Err(RecordStoreError::invalid_argument(err.to_string())),
        };

        ensure_scalar_fields(&fields, "record")?;

        match fields.get(ID_FIELD).and_then(as_integer) {
            Some(id) if id == self.id() => Ok(fields),
            Some(id) => Err(RecordStoreError::invalid_argument(format!(
                "record field '{ID_FIELD}' holds {id} but the record reports {}",
                self.id()
            ))),
            None => Err(RecordStoreError::invalid_argument(format!(
                "record should have an integer '{ID_FIELD}' field"
            ))),
        }
    }

    fn from_fields(fields: Document) -> RecordStoreResult<Self> {
        // Goes through JSON so custom deserialization errors keep the bare message `from_json`
        // reports.
        let value =
            to_value(&fields).map_err(|err| RecordStoreError::InvalidArgument(err.to_string()))?;

        Self::from_json(value)
    }

    fn to_json(&self) -> RecordStoreResult<Value> {
        to_value(self).map_err(|err| RecordStoreError::InvalidArgument(err.to_string()))
    }

    fn from_json(value: Value) -> RecordStoreResult<Self> {
        from_value(value).map_err(|err| RecordStoreError::Validation(err.to_string()))
    }
}

/// Conversion trait for map-like inputs that carry untyped record fields.
///
/// Anything that is not a map is rejected with [`RecordStoreError::InvalidArgument`].
pub trait IntoFields {
    /// Converts this value into a field map.
    fn into_fields(self) -> RecordStoreResult<Document>;
}

impl IntoFields for Document {
    fn into_fields(self) -> RecordStoreResult<Document> {
        Ok(self)
    }
}

impl IntoFields for Bson {
    fn into_fields(self) -> RecordStoreResult<Document> {
        match self {
            Bson::Document(fields) => Ok(fields),
            other => Err(RecordStoreError::invalid_argument(format!(
                "expected a map, got {}",
                kind_name(&other)
            ))),
        }
    }
}

impl IntoFields for Map<String, Value> {
    fn into_fields(self) -> RecordStoreResult<Document> {
        let out_of_range = self
            .iter()
            .find(|(_, value)| value.as_u64().is_some_and(|n| i64::try_from(n).is_err()));

        if let Some((key, value)) = out_of_range {
            return Err(RecordStoreError::validation(format!(
                "'{key}' holds {value}, which does not fit a 64-bit signed integer"
            )));
        }

        serialize_to_bson(&self)
            .map_err(|err| RecordStoreError::InvalidArgument(err.to_string()))?
            .into_fields()
    }
}

impl IntoFields for Value {
    fn into_fields(self) -> RecordStoreResult<Document> {
        match self {
            Value::Object(map) => map.into_fields(),
            other => Err(RecordStoreError::invalid_argument(format!(
                "expected a map, got {}",
                json_kind_name(&other)
            ))),
        }
    }
}

/// Returns `true` if the value belongs to the scalar union records and queries are made of.
pub fn is_scalar(value: &Bson) -> bool {
    matches!(
        value,
        Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) | Bson::String(_) | Bson::Boolean(_)
    )
}

/// Returns the integer held by a value, if it holds one.
pub fn as_integer(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(value) => Some(i64::from(*value)),
        Bson::Int64(value) => Some(*value),
        _ => None,
    }
}

/// A short human readable name for the kind of a value, used in error messages.
pub fn kind_name(value: &Bson) -> &'static str {
    match value {
        Bson::Int32(_) | Bson::Int64(_) => "integer",
        Bson::Double(_) => "float",
        Bson::String(_) => "string",
        Bson::Boolean(_) => "bool",
        Bson::Null => "null",
        Bson::Array(_) => "array",
        Bson::Document(_) => "map",
        _ => "unsupported value",
    }
}

pub(crate) fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

/// Checks that every value in `fields` is a scalar.
///
/// `what` names the map in the error message ("record", "query").
pub fn ensure_scalar_fields(fields: &Document, what: &str) -> RecordStoreResult<()> {
    match fields.iter().find(|(_, value)| !is_scalar(value)) {
        Some((key, value)) => Err(RecordStoreError::invalid_argument(format!(
            "{what} field '{key}' holds {}, expected a scalar",
            kind_name(value)
        ))),
        None => Ok(()),
    }
}
