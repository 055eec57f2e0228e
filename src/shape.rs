// Copyright 2025 Cowboy AI, LLC.

//! Structural shapes of records
//!
//! A [`RecordShape`] is the ordered list of a record's field names together
//! with the kind of value each field holds. Two records are structurally
//! compatible when their shapes [`match`](RecordShape::matches): same names,
//! same order, same kinds. A `null` field stands for an absent optional
//! value and is compatible with any kind.

use crate::errors::{RecordError, RecordResult};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Kind of value held by a single record field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A string
    Text,
    /// A whole number
    Integer,
    /// A number with a fractional part
    Float,
    /// `true` or `false`
    Boolean,
    /// An absent value
    Null,
    /// A list of values of one element kind
    ///
    /// The element kind of an empty list is `Null`.
    Sequence(Box<FieldKind>),
    /// A list whose elements have incompatible kinds
    Mixed,
    /// A nested record
    Record(RecordShape),
}

impl FieldKind {
    /// Classify a JSON value
    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::String(_) => FieldKind::Text,
            Value::Number(n) if n.is_i64() || n.is_u64() => FieldKind::Integer,
            Value::Number(_) => FieldKind::Float,
            Value::Bool(_) => FieldKind::Boolean,
            Value::Null => FieldKind::Null,
            Value::Array(items) => {
                let element = items.iter().fold(FieldKind::Null, |acc, item| {
                    acc.merge(&FieldKind::of_value(item))
                        .unwrap_or(FieldKind::Mixed)
                });
                match element {
                    FieldKind::Mixed => FieldKind::Mixed,
                    element => FieldKind::Sequence(Box::new(element)),
                }
            }
            Value::Object(map) => FieldKind::Record(RecordShape::from_map(map)),
        }
    }

    /// Combine two kinds seen for the same field
    ///
    /// `Null` yields the other kind. Returns `None` when the kinds conflict.
    pub fn merge(&self, other: &FieldKind) -> Option<FieldKind> {
        match (self, other) {
            (FieldKind::Null, kind) | (kind, FieldKind::Null) => Some(kind.clone()),
            (FieldKind::Sequence(a), FieldKind::Sequence(b)) => {
                a.merge(b).map(|k| FieldKind::Sequence(Box::new(k)))
            }
            (FieldKind::Record(a), FieldKind::Record(b)) => a.merge(b).map(FieldKind::Record),
            (a, b) if a == b => Some(a.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Null => write!(f, "null"),
            FieldKind::Sequence(element) if **element == FieldKind::Null => write!(f, "sequence"),
            FieldKind::Sequence(element) => write!(f, "sequence<{element}>"),
            FieldKind::Mixed => write!(f, "mixed"),
            FieldKind::Record(shape) => write!(f, "{shape}"),
        }
    }
}

/// Ordered field set of a record
///
/// # Examples
///
/// ```rust
/// use anonym_records::{FieldKind, PersonAge, RecordShape};
///
/// let shape = RecordShape::of(&PersonAge::new(5, "Emily")).unwrap();
/// assert_eq!(shape.field_names(), vec!["Age", "Name"]);
/// assert_eq!(shape.kind("Age"), Some(&FieldKind::Integer));
/// assert_eq!(shape.to_string(), "{ Age: integer, Name: text }");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordShape {
    fields: IndexMap<String, FieldKind>,
}

impl RecordShape {
    /// Derive the shape of any serializable value
    pub fn of<T: Serialize + ?Sized>(value: &T) -> RecordResult<Self> {
        let value = serde_json::to_value(value)?;
        Self::from_value(&value)
    }

    /// Derive the shape of a JSON value, which must be an object
    pub fn from_value(value: &Value) -> RecordResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(RecordError::NotARecord(
                FieldKind::of_value(other).to_string(),
            )),
        }
    }

    fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let fields = map
            .iter()
            .map(|(name, value)| (name.clone(), FieldKind::of_value(value)))
            .collect();
        Self { fields }
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Kind of the named field, if present
    pub fn kind(&self, name: &str) -> Option<&FieldKind> {
        self.fields.get(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Combine two shapes field by field
    ///
    /// Names must agree in the same order; kinds combine as in
    /// [`FieldKind::merge`]. Returns `None` on any conflict.
    pub fn merge(&self, other: &RecordShape) -> Option<RecordShape> {
        if self.fields.len() != other.fields.len() {
            return None;
        }
        let fields = self
            .fields
            .iter()
            .zip(other.fields.iter())
            .map(|((name, kind), (other_name, other_kind))| {
                (name == other_name)
                    .then(|| kind.merge(other_kind))
                    .flatten()
                    .map(|kind| (name.clone(), kind))
            })
            .collect::<Option<IndexMap<_, _>>>()?;
        Some(Self { fields })
    }

    /// Whether a value of this shape and a value of `other` can belong to
    /// the same sequence
    pub fn matches(&self, other: &RecordShape) -> bool {
        self.merge(other).is_some()
    }

    /// Check that every value in `values` matches the shape of the others
    ///
    /// Returns the combined shape, with `null` fields filled in from any
    /// element that has a value there. The first offending element is
    /// reported by index.
    pub fn common(values: &[Value]) -> RecordResult<Self> {
        let (first, rest) = values.split_first().ok_or(RecordError::EmptySequence)?;
        let mut expected = Self::from_value(first)?;

        for (offset, value) in rest.iter().enumerate() {
            let found = Self::from_value(value)?;
            expected = expected
                .merge(&found)
                .ok_or_else(|| RecordError::ShapeMismatch {
                    index: offset + 1,
                    expected: expected.to_string(),
                    found: found.to_string(),
                })?;
        }

        Ok(expected)
    }
}

// Exact equality; IndexMap's own ignores insertion order.
impl PartialEq for RecordShape {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len() && self.fields.iter().eq(other.fields.iter())
    }
}

impl Eq for RecordShape {}

impl fmt::Display for RecordShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ ")?;
        for (i, (name, kind)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {kind}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_preserves_field_order() {
        let shape = RecordShape::from_value(&json!({ "Age": 5, "Name": "Emily" })).unwrap();
        assert_eq!(shape.field_names(), vec!["Age", "Name"]);

        let reversed = RecordShape::from_value(&json!({ "Name": "Emily", "Age": 5 })).unwrap();
        assert_eq!(reversed.field_names(), vec!["Name", "Age"]);

        assert_ne!(shape, reversed);
    }

    #[test]
    fn test_field_kinds() {
        let shape = RecordShape::from_value(&json!({
            "t": "x",
            "i": -3,
            "f": 1.5,
            "b": true,
            "n": null,
            "s": [1, 2],
            "r": { "City": "Tokyo" }
        }))
        .unwrap();

        assert_eq!(shape.kind("t"), Some(&FieldKind::Text));
        assert_eq!(shape.kind("i"), Some(&FieldKind::Integer));
        assert_eq!(shape.kind("f"), Some(&FieldKind::Float));
        assert_eq!(shape.kind("b"), Some(&FieldKind::Boolean));
        assert_eq!(shape.kind("n"), Some(&FieldKind::Null));
        assert_eq!(
            shape.kind("s"),
            Some(&FieldKind::Sequence(Box::new(FieldKind::Integer)))
        );
        assert!(matches!(shape.kind("r"), Some(FieldKind::Record(_))));
        assert_eq!(shape.kind("missing"), None);
        assert_eq!(shape.len(), 7);
    }

    #[test]
    fn test_display_nested() {
        let shape = RecordShape::from_value(&json!({
            "Name": "Scott",
            "NestedRecord": { "City": "Tokyo", "Address": "New street" }
        }))
        .unwrap();

        assert_eq!(
            shape.to_string(),
            "{ Name: text, NestedRecord: { City: text, Address: text } }"
        );
        assert_eq!(RecordShape::default().to_string(), "{ }");
        assert!(RecordShape::default().is_empty());
    }

    #[test]
    fn test_non_object_is_not_a_record() {
        let err = RecordShape::from_value(&json!(42)).unwrap_err();
        assert_eq!(err, RecordError::NotARecord("integer".to_string()));
    }

    #[test]
    fn test_common_accepts_homogeneous() {
        let values = vec![
            json!({ "Age": 5, "Name": "Emily" }),
            json!({ "Age": 8, "Name": "Mike" }),
        ];
        let shape = RecordShape::common(&values).unwrap();
        assert_eq!(shape.to_string(), "{ Age: integer, Name: text }");
    }

    #[test]
    fn test_common_rejects_reordered_fields() {
        let values = vec![
            json!({ "Age": 5, "Name": "Emily" }),
            json!({ "Name": "Mike", "Age": 8 }),
        ];
        let err = RecordShape::common(&values).unwrap_err();
        assert_eq!(
            err,
            RecordError::ShapeMismatch {
                index: 1,
                expected: "{ Age: integer, Name: text }".to_string(),
                found: "{ Name: text, Age: integer }".to_string(),
            }
        );
    }

    #[test]
    fn test_common_rejects_differing_types_and_fields() {
        let wrong_type = vec![
            json!({ "Age": 5, "Name": "Emily" }),
            json!({ "Age": "eight", "Name": "Mike" }),
        ];
        assert!(RecordShape::common(&wrong_type).unwrap_err().is_shape_error());

        let extra_field = vec![
            json!({ "Age": 5, "Name": "Emily" }),
            json!({ "Age": 8, "Name": "Mike" }),
            json!({ "Age": 9, "Name": "Ann", "City": "Oslo" }),
        ];
        match RecordShape::common(&extra_field).unwrap_err() {
            RecordError::ShapeMismatch { index, .. } => assert_eq!(index, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_field_matches_any_kind() {
        let present = RecordShape::from_value(&json!({ "Name": "Emily", "Phone": "123" })).unwrap();
        let absent = RecordShape::from_value(&json!({ "Name": "Mike", "Phone": null })).unwrap();

        assert!(present.matches(&absent));
        assert!(absent.matches(&present));
        assert_eq!(present.merge(&absent), Some(present.clone()));
    }

    #[test]
    fn test_common_fills_null_fields_from_later_elements() {
        let values = vec![
            json!({ "Name": "Mike", "Phone": null }),
            json!({ "Name": "Emily", "Phone": "123" }),
            json!({ "Name": "Ann", "Phone": null }),
        ];
        let shape = RecordShape::common(&values).unwrap();
        assert_eq!(shape.to_string(), "{ Name: text, Phone: text }");
    }

    #[test]
    fn test_sequence_kind_tracks_elements() {
        assert_eq!(
            FieldKind::of_value(&json!(["a", "b"])),
            FieldKind::Sequence(Box::new(FieldKind::Text))
        );
        assert_eq!(FieldKind::of_value(&json!([1, "b"])), FieldKind::Mixed);
        assert_eq!(FieldKind::of_value(&json!([])).to_string(), "sequence");
        assert_eq!(FieldKind::of_value(&json!([1, null])).to_string(), "sequence<integer>");
    }

    #[test]
    fn test_common_rejects_differing_sequence_elements() {
        let values = vec![json!({ "Tags": [1] }), json!({ "Tags": ["a"] })];
        assert_eq!(
            RecordShape::common(&values),
            Err(RecordError::ShapeMismatch {
                index: 1,
                expected: "{ Tags: sequence<integer> }".to_string(),
                found: "{ Tags: sequence<text> }".to_string(),
            })
        );

        let values = vec![json!({ "Tags": [] }), json!({ "Tags": ["a"] })];
        assert!(RecordShape::common(&values).is_ok());
    }

    #[test]
    fn test_merge_requires_same_names_in_order() {
        let a = RecordShape::from_value(&json!({ "Age": 5, "Name": "Emily" })).unwrap();
        let b = RecordShape::from_value(&json!({ "Name": "Emily", "Age": 5 })).unwrap();
        let c = RecordShape::from_value(&json!({ "Age": 5 })).unwrap();

        assert_eq!(a.merge(&b), None);
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_common_rejects_empty() {
        assert_eq!(RecordShape::common(&[]), Err(RecordError::EmptySequence));
    }
}
