//! Query evaluation for in-memory record filtering.
//!
//! This module decides whether a stored field map matches a query-by-example.

use bson::{Bson, Document};

use reclayer_core::query::Query;

/// Comparable representation of the scalar values records and queries hold.
///
/// Integers and floats compare by numeric value (`1 == 1.0`); booleans never equal numbers.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// Boolean value
    Bool(bool),
    /// Integer value, kept exact
    Int(i64),
    /// Float value
    Float(f64),
    /// String value
    String(&'a str),
    /// Anything outside the scalar union; never equal to anything
    Other,
}

impl<'a> From<&'a Bson> for Comparable<'a> {
    fn from(bson: &'a Bson) -> Self {
        match bson {
            Bson::Boolean(value) => Comparable::Bool(*value),
            Bson::Int32(value) => Comparable::Int(i64::from(*value)),
            Bson::Int64(value) => Comparable::Int(*value),
            Bson::Double(value) => Comparable::Float(*value),
            Bson::String(value) => Comparable::String(value),
            _ => Comparable::Other,
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Bool(a), Comparable::Bool(b)) => a == b,
            (Comparable::Int(a), Comparable::Int(b)) => a == b,
            (Comparable::Float(a), Comparable::Float(b)) => a == b,
            (Comparable::Int(a), Comparable::Float(b)) | (Comparable::Float(b), Comparable::Int(a)) => {
                int_equals_float(*a, *b)
            }
            (Comparable::String(a), Comparable::String(b)) => a == b,
            _ => false,
        }
    }
}

/// Exact integer/float equality. `i64 as f64` rounds above 2^53, so the float is converted
/// instead, once it is known to be integral and inside the `i64` range.
fn int_equals_float(int: i64, float: f64) -> bool {
    // -2^63 is exact as f64; 2^63 is the first value past i64::MAX.
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = -(i64::MIN as f64);

    float.fract() == 0.0 && (LOWER..UPPER).contains(&float) && float as i64 == int
}

/// Matches stored records against a single query.
pub(crate) struct RecordMatcher<'q> {
    query: &'q Query,
}

impl<'q> RecordMatcher<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self { query }
    }

    /// Returns `true` if `record` holds every queried field with an equal value.
    pub fn matches(&self, record: &Document) -> bool {
        self.query.iter().all(|(field, expected)| {
            record
                .get(field)
                .is_some_and(|actual| Comparable::from(actual) == Comparable::from(expected))
        })
    }

    /// Returns the position of the first matching record.
    pub fn position(&self, records: &[Document]) -> Option<usize> {
        records
            .iter()
            .position(|record| self.matches(record))
    }

    /// Returns every matching record, in order.
    pub fn filter<'r>(&self, records: &'r [Document]) -> impl Iterator<Item = &'r Document> {
        records
            .iter()
            .filter(|record| self.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    fn query(fields: Document) -> Query {
        Query::from_fields(fields).unwrap()
    }

    #[test]
    fn numbers_compare_by_value_across_widths() {
        assert_eq!(Comparable::from(&Bson::Int32(1)), Comparable::from(&Bson::Int64(1)));
        assert_eq!(Comparable::from(&Bson::Int64(2)), Comparable::from(&Bson::Double(2.0)));
        assert_ne!(Comparable::from(&Bson::Double(2.5)), Comparable::from(&Bson::Int32(2)));
    }

    #[test]
    fn large_integers_compare_exactly_with_floats() {
        let two_pow_53 = 9_007_199_254_740_992_i64;

        assert_eq!(Comparable::Int(two_pow_53), Comparable::Float(two_pow_53 as f64));
        assert_ne!(Comparable::Int(two_pow_53 + 1), Comparable::Float(two_pow_53 as f64));
        assert_ne!(Comparable::Float(9.223_372_036_854_775_807e18), Comparable::Int(i64::MAX));
        assert_eq!(Comparable::Int(i64::MIN), Comparable::Float(i64::MIN as f64));
        assert_ne!(Comparable::Int(0), Comparable::Float(f64::NAN));
        assert_ne!(Comparable::Int(i64::MAX), Comparable::Float(f64::INFINITY));
    }

    #[test]
    fn float_queries_do_not_match_neighbouring_ids() {
        let record = doc! { "id": 9_007_199_254_740_993_i64 };

        assert!(!RecordMatcher::new(&query(doc! { "id": 9_007_199_254_740_992.0 })).matches(&record));
        assert!(RecordMatcher::new(&query(doc! { "id": 9_007_199_254_740_993_i64 })).matches(&record));
    }

    #[test]
    fn bools_and_strings_never_equal_numbers() {
        assert_ne!(Comparable::from(&Bson::Boolean(true)), Comparable::from(&Bson::Int32(1)));
        assert_ne!(
            Comparable::from(&Bson::String("1".to_string())),
            Comparable::from(&Bson::Int32(1))
        );
        assert_ne!(Comparable::from(&Bson::Null), Comparable::from(&Bson::Null));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = Query::new();

        assert!(RecordMatcher::new(&query).matches(&doc! { "id": 1 }));
        assert!(RecordMatcher::new(&query).matches(&doc! {}));
    }

    #[test]
    fn every_query_field_must_agree() {
        let record = doc! { "id": 1_i64, "name": "apple", "price": 2.99 };

        assert!(RecordMatcher::new(&query(doc! { "price": 2.99 })).matches(&record));
        assert!(RecordMatcher::new(&query(doc! { "id": 1, "name": "apple" })).matches(&record));
        assert!(!RecordMatcher::new(&query(doc! { "id": 1, "name": "orange" })).matches(&record));
    }

    #[test]
    fn missing_field_is_a_miss() {
        let record = doc! { "id": 1_i64, "name": "apple" };

        assert!(!RecordMatcher::new(&query(doc! { "colour": "red" })).matches(&record));
    }

    #[test]
    fn position_and_filter_follow_record_order() {
        let records = vec![
            doc! { "id": 1, "price": 2.99 },
            doc! { "id": 2, "price": 3.99 },
            doc! { "id": 3, "price": 2.99 },
        ];
        let query = query(doc! { "price": 2.99 });
        let matcher = RecordMatcher::new(&query);

        assert_eq!(matcher.position(&records), Some(0));
        assert_eq!(
            matcher
                .filter(&records)
                .map(|record| record.get_i32("id").unwrap())
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(RecordMatcher::new(&Query::by_id(9)).position(&records), None);
    }
}
