//! Field vocabulary and field masks.
//!
//! # Responsibility
//! - Define the fixed attribute vocabulary of remote resources.
//! - Represent the caller-declared subset of requested attributes.
//!
//! # Invariants
//! - A mask never contains the same field twice.
//! - Mask order is the order the caller declared, so the rendered query
//!   string is stable.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod group_field;
pub mod person_field;

pub use group_field::GroupField;
pub use person_field::PersonField;

/// Wire key of the resource identifier. Present regardless of mask.
pub const FIELD_RESOURCE_NAME: &str = "resourceName";

/// One attribute of a remote resource that can be requested through a mask.
pub trait MaskField: Copy + Eq + Debug + 'static {
    /// Exact key of this attribute inside the remote document.
    fn wire_key(self) -> &'static str;

    /// Every field of the vocabulary in declaration order.
    fn all() -> &'static [Self];

    /// Parses one field from its wire key.
    fn parse(value: &str) -> Result<Self, FieldParseError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(FieldParseError::EmptyField);
        }
        Self::all()
            .iter()
            .copied()
            .find(|field| field.wire_key() == normalized)
            .ok_or_else(|| FieldParseError::UnsupportedField(normalized.to_string()))
    }
}

/// Field vocabulary parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    EmptyField,
    UnsupportedField(String),
}

impl Display for FieldParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField => write!(f, "field value must not be empty"),
            Self::UnsupportedField(value) => write!(f, "field is unsupported: {value}"),
        }
    }
}

impl Error for FieldParseError {}

/// Caller-declared set of requested attributes.
///
/// Fixed once a model is built from it; models only hand out shared
/// references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMask<F: MaskField> {
    fields: Vec<F>,
}

impl<F: MaskField> FieldMask<F> {
    /// Builds a mask, dropping repeated fields but keeping first-seen order.
    pub fn new(fields: impl IntoIterator<Item = F>) -> Self {
        let mut deduped = Vec::new();
        for field in fields {
            if !deduped.contains(&field) {
                deduped.push(field);
            }
        }
        Self { fields: deduped }
    }

    /// Mask requesting the whole vocabulary.
    pub fn all() -> Self {
        Self::new(F::all().iter().copied())
    }

    /// Parses a comma-joined list of wire keys, e.g. `names,emailAddresses`.
    pub fn parse(value: &str) -> Result<Self, FieldParseError> {
        let fields = value
            .split(',')
            .map(F::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(fields))
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Comma-joined wire keys in the form the remote API takes as a request
    /// parameter.
    pub fn to_query_string(&self) -> String {
        self.fields
            .iter()
            .map(|field| field.wire_key())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<F: MaskField> FromIterator<F> for FieldMask<F> {
    fn from_iter<T: IntoIterator<Item = F>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<F: MaskField> Display for FieldMask<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}
