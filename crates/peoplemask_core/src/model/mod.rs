//! Masked document model and value types.
//!
//! # Responsibility
//! - Own the working copy and the pristine copy of one remote document.
//! - Gate every attribute access through the caller's field mask.
//! - Define the error taxonomy shared by all projection layers.
//!
//! # Invariants
//! - Every failed operation leaves the working document untouched.
//! - Errors here are surfaced to callers, never recovered locally.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod date_value;
pub mod masked;

pub use date_value::{DateValue, DateValueError, DateValueVisitor, WireDate};
pub use masked::{FieldSlot, MaskedModel};

pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the masked model and its projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Read or write of an attribute that the field mask does not request.
    FieldNotInMask { field: &'static str, mask: String },
    /// Date component outside its valid range.
    InvalidDateComponent(DateValueError),
    /// Second element appended to the single-valued names attribute.
    MultipleNamesNotAllowed,
    /// Index-based removal with a position past the end of the list.
    IndexOutOfRange { index: usize, len: usize },
    /// Removal strategy selected positions that were never suggested.
    InvalidRemovalSet {
        selected: Vec<usize>,
        suggested: Vec<usize>,
    },
    /// Input is not an object document with a string identifier.
    InvalidDocument(String),
    /// Attribute exists but does not have the shape its accessor needs.
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldNotInMask { field, mask } => {
                write!(f, "field `{field}` not in current mask `{mask}`")
            }
            Self::InvalidDateComponent(err) => write!(f, "invalid date component: {err}"),
            Self::MultipleNamesNotAllowed => write!(
                f,
                "cannot append another name, only one name item is allowed per person"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::InvalidRemovalSet {
                selected,
                suggested,
            } => write!(
                f,
                "removal of unsuggested items requested: selected {selected:?}, suggested {suggested:?}"
            ),
            Self::InvalidDocument(message) => write!(f, "invalid document: {message}"),
            Self::UnexpectedShape { field, expected } => {
                write!(f, "field `{field}` is not {expected}")
            }
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateComponent(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DateValueError> for ModelError {
    fn from(value: DateValueError) -> Self {
        Self::InvalidDateComponent(value)
    }
}
