// Copyright 2025 Cowboy AI, LLC.

//! Immutable record types
//!
//! Each record is a plain value: every field is supplied when it is built and
//! none can be changed afterwards. Fields are private and exposed through
//! read-only accessors. Records serialize with PascalCase field names in
//! declaration order, so their [`RecordShape`] matches the field list below.

use crate::employee::EmployeeSource;
use crate::errors::{RecordError, RecordResult};
use crate::shape::RecordShape;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Marker trait for immutable, structurally comparable records
pub trait ValueObject: Clone + PartialEq + Eq + fmt::Debug + Serialize {
    /// Structural shape of this record
    ///
    /// An optional field that is unset shows up as `null`; use
    /// [`RecordShape::matches`] to compare records of one type.
    fn shape(&self) -> RecordResult<RecordShape> {
        RecordShape::of(self)
    }
}

/// Name and age of an employee, taken from an [`EmployeeSource`]
///
/// The employee's identifier is used as the age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeCard {
    name: String,
    age: i32,
}

impl EmployeeCard {
    /// Create a card from literal values
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Create a card from an employee's name and identifier
    pub fn from_source<E: EmployeeSource + ?Sized>(source: &E) -> Self {
        Self::new(source.name(), source.id().value())
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Age
    pub fn age(&self) -> i32 {
        self.age
    }
}

impl ValueObject for EmployeeCard {}

impl fmt::Display for EmployeeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Using anonym type props: name {}, age: {}",
            self.name, self.age
        )
    }
}

/// City and street address, nested inside a [`ResidentCard`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Residence {
    city: String,
    address: String,
}

impl Residence {
    /// Create a residence
    pub fn new(city: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            address: address.into(),
        }
    }

    /// City
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Street address
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl ValueObject for Residence {}

/// A name together with a nested [`Residence`] record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResidentCard {
    name: String,
    nested_record: Residence,
}

impl ResidentCard {
    /// Create a card; the nested record is fixed from here on
    pub fn new(name: impl Into<String>, nested_record: Residence) -> Self {
        Self {
            name: name.into(),
            nested_record,
        }
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nested residence record
    pub fn nested_record(&self) -> &Residence {
        &self.nested_record
    }
}

impl ValueObject for ResidentCard {}

impl fmt::Display for ResidentCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, nested City and Adress: {}, {}",
            self.name, self.nested_record.city, self.nested_record.address
        )
    }
}

/// Age and name, the element type of the demo's record sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersonAge {
    age: i32,
    name: String,
}

impl PersonAge {
    /// Create an element
    pub fn new(age: i32, name: impl Into<String>) -> Self {
        Self {
            age,
            name: name.into(),
        }
    }

    /// Age
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ValueObject for PersonAge {}

impl fmt::Display for PersonAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.age, self.name)
    }
}

/// Ordered, homogeneous sequence of records
///
/// Every element has the single type `T`, so mixing records of different
/// shapes does not compile. Data that arrives as JSON goes through
/// [`RecordSequence::from_json`], which applies the same rule at runtime.
///
/// # Examples
///
/// ```rust
/// use anonym_records::{PersonAge, RecordSequence};
///
/// let people = RecordSequence::from([PersonAge::new(5, "Emily"), PersonAge::new(8, "Mike")]);
/// let lines: Vec<String> = people.iter().map(ToString::to_string).collect();
/// assert_eq!(lines, vec!["5, Emily", "8, Mike"]);
/// ```
///
/// Elements of another record type are rejected at compile time:
///
/// ```compile_fail
/// use anonym_records::{EmployeeCard, PersonAge, RecordSequence};
///
/// let mixed = RecordSequence::from([PersonAge::new(5, "Emily"), EmployeeCard::new("Mike", 8)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordSequence<T> {
    items: Vec<T>,
}

impl<T: ValueObject> RecordSequence<T> {
    /// Create a sequence from already-typed elements
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate in sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Shape shared by every element, with `null` fields filled in from
    /// any element that sets them
    pub fn element_shape(&self) -> RecordResult<RecordShape> {
        let (first, rest) = self.items.split_first().ok_or(RecordError::EmptySequence)?;
        let mut shape = first.shape()?;
        for (offset, item) in rest.iter().enumerate() {
            let found = item.shape()?;
            shape = shape.merge(&found).ok_or_else(|| RecordError::ShapeMismatch {
                index: offset + 1,
                expected: shape.to_string(),
                found: found.to_string(),
            })?;
        }
        Ok(shape)
    }
}

impl<T: ValueObject + DeserializeOwned> RecordSequence<T> {
    /// Parse a JSON array of records
    ///
    /// All elements must share one shape (field names, order and kinds), and
    /// that shape must be the declared shape of `T`.
    pub fn from_json(json: &str) -> RecordResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(values) = value else {
            return Err(RecordError::Serialization(
                "expected a JSON array of records".to_string(),
            ));
        };

        let common = RecordShape::common(&values)?;

        let items = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<T>(value).map_err(|err| {
                    tracing::debug!(index, error = %err, "element does not fit declared type");
                    RecordError::ShapeMismatch {
                        index,
                        expected: type_label::<T>().to_string(),
                        found: common.to_string(),
                    }
                })
            })
            .collect::<RecordResult<Vec<_>>>()?;

        for (index, item) in items.iter().enumerate() {
            let declared = item.shape()?;
            if !declared.matches(&common) {
                return Err(RecordError::ShapeMismatch {
                    index,
                    expected: declared.to_string(),
                    found: common.to_string(),
                });
            }
        }

        tracing::debug!(len = items.len(), shape = %common, "parsed record sequence");
        Ok(Self { items })
    }
}

/// Unqualified type name, e.g. `PersonAge`
fn type_label<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

impl<T: ValueObject, const N: usize> From<[T; N]> for RecordSequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items.into())
    }
}

impl<'a, T> IntoIterator for &'a RecordSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
