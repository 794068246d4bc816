//! Field-mask gated wrapper around one remote document.
//!
//! # Responsibility
//! - Keep a working copy for mutation and a pristine copy for change
//!   detection.
//! - Hand out read access and lazily-creating write slots, both checked
//!   against the field mask.
//!
//! # Invariants
//! - The pristine copy is never mutated after construction.
//! - `FieldSlot` is the only way to obtain mutable access to the working
//!   document, and it is only created after a mask check.
//! - Keys outside the mask are never touched, so they survive a
//!   read -> mutate -> snapshot round trip unchanged.

use super::{ModelError, ModelResult};
use crate::field::{FieldMask, MaskField, FIELD_RESOURCE_NAME};
use log::debug;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// Working and pristine copy of one document plus the mask that gates it.
#[derive(Debug, Clone)]
pub struct MaskedModel<F: MaskField> {
    document: Map<String, Value>,
    pristine: Map<String, Value>,
    field_mask: FieldMask<F>,
}

impl<F: MaskField> MaskedModel<F> {
    /// Wraps `document`, which must be an object carrying a string
    /// `resourceName`.
    pub fn new(document: Value, field_mask: FieldMask<F>) -> ModelResult<Self> {
        let Value::Object(document) = document else {
            return Err(ModelError::InvalidDocument(
                "document must be a JSON object".to_string(),
            ));
        };
        if !matches!(document.get(FIELD_RESOURCE_NAME), Some(Value::String(_))) {
            return Err(ModelError::InvalidDocument(format!(
                "document must carry a string `{FIELD_RESOURCE_NAME}`"
            )));
        }

        Ok(Self {
            pristine: document.clone(),
            document,
            field_mask,
        })
    }

    /// Current value of `field`; `Ok(None)` when the key is absent.
    pub fn read(&self, field: F) -> ModelResult<Option<&Value>> {
        self.check_mask(field)?;
        Ok(self.document.get(field.wire_key()))
    }

    /// Write capability for `field`. Creating the key with `default` is
    /// deferred until the slot is first ensured.
    pub fn write_slot(&mut self, field: F, default: Value) -> ModelResult<FieldSlot<'_>> {
        self.check_mask(field)?;
        Ok(FieldSlot {
            document: &mut self.document,
            key: field.wire_key(),
            default,
        })
    }

    /// Reads a key outside the field vocabulary. Such keys are controlled
    /// by request parameters other than the mask (e.g. group members).
    pub fn read_unmasked(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Unique resource name. Validated at construction and never writable
    /// through a slot.
    pub fn identifier(&self) -> &str {
        self.document
            .get(FIELD_RESOURCE_NAME)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn field_mask(&self) -> &FieldMask<F> {
        &self.field_mask
    }

    /// Deep copy of the working document.
    pub fn snapshot(&self) -> Value {
        Value::Object(self.document.clone())
    }

    /// Structural comparison of working and pristine copy.
    pub fn has_changes(&self) -> bool {
        self.document != self.pristine
    }

    fn check_mask(&self, field: F) -> ModelResult<()> {
        if self.field_mask.contains(field) {
            return Ok(());
        }
        debug!(
            "event=field_access module=model status=denied field={} mask={}",
            field.wire_key(),
            self.field_mask
        );
        Err(ModelError::FieldNotInMask {
            field: field.wire_key(),
            mask: self.field_mask.to_query_string(),
        })
    }
}

impl<F: MaskField> Display for MaskedModel<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = serde_json::to_string(&self.document).map_err(|_| std::fmt::Error)?;
        write!(f, "{rendered}")
    }
}

/// Mask-checked mutable access to one top-level key.
///
/// Borrows the owning model mutably, so no other access to the document can
/// happen while a slot (or any view derived from it) is alive.
#[derive(Debug)]
pub struct FieldSlot<'a> {
    document: &'a mut Map<String, Value>,
    key: &'static str,
    default: Value,
}

impl<'a> FieldSlot<'a> {
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Current value; an explicit `null` counts as absent.
    pub fn current(&self) -> Option<&Value> {
        self.document.get(self.key).filter(|value| !value.is_null())
    }

    pub fn current_mut(&mut self) -> Option<&mut Value> {
        self.document
            .get_mut(self.key)
            .filter(|value| !value.is_null())
    }

    /// Value at the key, first inserting the default when absent or `null`.
    pub fn ensure(&mut self) -> &mut Value {
        let default = &self.default;
        let value = self
            .document
            .entry(self.key)
            .or_insert_with(|| default.clone());
        if value.is_null() {
            *value = default.clone();
        }
        value
    }
}
