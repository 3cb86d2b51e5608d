//! The catalog's `Product` entity.
//!
//! A [`Product`] can only exist in a valid state: its fields are private and every way of
//! obtaining one (direct construction, the `with_*` setters, deserialization from a field map
//! or JSON) runs the same validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use reclayer::prelude::*;

/// Minimum length of a product name, counted in characters after trimming.
pub const MIN_NAME_LEN: usize = 5;

/// A catalog product.
///
/// # Invariants
///
/// - `id` is strictly positive
/// - `name` has no surrounding whitespace and is at least [`MIN_NAME_LEN`] characters long
/// - `price` is finite and strictly positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductFields")]
pub struct Product {
    id: i64,
    name: String,
    price: f64,
}

/// Unvalidated wire form of a [`Product`].
#[derive(Deserialize)]
struct ProductFields {
    id: i64,
    name: String,
    price: f64,
}

/// A single violated field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation(&'static str);

impl FieldViolation {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl From<FieldViolation> for RecordStoreError {
    fn from(violation: FieldViolation) -> Self {
        RecordStoreError::Validation(violation.0.to_string())
    }
}

fn validate_id(id: i64) -> Result<i64, FieldViolation> {
    if id > 0 {
        Ok(id)
    } else {
        Err(FieldViolation("'id' must be a positive integer"))
    }
}

fn validate_name(name: &str) -> Result<String, FieldViolation> {
    let name = name.trim();

    if name.is_empty() {
        Err(FieldViolation("'name' cannot be empty"))
    } else if name.chars().count() < MIN_NAME_LEN {
        Err(FieldViolation("'name' should be at least 5 characters long"))
    } else {
        Ok(name.to_string())
    }
}

fn validate_price(price: f64) -> Result<f64, FieldViolation> {
    // NaN fails the comparison; infinities have no JSON form.
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(FieldViolation("'price' must be a positive number"))
    }
}

impl TryFrom<ProductFields> for Product {
    type Error = FieldViolation;

    fn try_from(fields: ProductFields) -> Result<Self, Self::Error> {
        Ok(Product {
            id: validate_id(fields.id)?,
            name: validate_name(&fields.name)?,
            price: validate_price(fields.price)?,
        })
    }
}

impl Product {
    /// Creates a validated product. The stored name is the trimmed one.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Validation`] naming the first violated rule.
    pub fn new(id: i64, name: impl AsRef<str>, price: f64) -> RecordStoreResult<Self> {
        Ok(Product {
            id: validate_id(id)?,
            name: validate_name(name.as_ref())?,
            price: validate_price(price)?,
        })
    }

    /// Creates a validated product from an untyped map such as `{"id": 1, "name": "apple",
    /// "price": 2.99}`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidArgument`] if `data` is not a map, and
    /// [`RecordStoreError::Validation`] if a field is missing, has the wrong kind, or breaks a
    /// rule.
    pub fn from_data(data: impl IntoFields) -> RecordStoreResult<Self> {
        Product::from_fields(data.into_fields()?)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns a copy with a new, validated name.
    pub fn with_name(self, name: impl AsRef<str>) -> RecordStoreResult<Self> {
        Ok(Product { name: validate_name(name.as_ref())?, ..self })
    }

    /// Returns a copy with a new, validated price.
    pub fn with_price(self, price: f64) -> RecordStoreResult<Self> {
        Ok(Product { price: validate_price(price)?, ..self })
    }
}

impl Record for Product {
    fn id(&self) -> i64 {
        self.id
    }

    fn collection_name() -> &'static str {
        "products"
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id={} name='{}' price={}", self.id, self.name, self.price)
    }
}
