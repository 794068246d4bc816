//! Contact-group facade.
//!
//! # Responsibility
//! - Expose the scalar attributes of a contact group through its mask.
//! - Answer membership questions for person records.
//!
//! # Invariants
//! - `memberResourceNames` is outside the field vocabulary and is read
//!   without mask gating. A missing key means the group has no members
//!   (system groups are returned that way).

use crate::field::{FieldMask, GroupField};
use crate::model::{MaskedModel, ModelError, ModelResult};
use crate::person::Person;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Wire key of the member identifier list.
pub const GROUP_FIELD_MEMBER_RESOURCE_NAMES: &str = "memberResourceNames";

/// One contact group plus the mask it was fetched with.
#[derive(Debug, Clone)]
pub struct Group {
    model: MaskedModel<GroupField>,
}

impl Group {
    pub fn new(document: Value, field_mask: FieldMask<GroupField>) -> ModelResult<Self> {
        Ok(Self {
            model: MaskedModel::new(document, field_mask)?,
        })
    }

    pub fn identifier(&self) -> &str {
        self.model.identifier()
    }

    pub fn field_mask(&self) -> &FieldMask<GroupField> {
        self.model.field_mask()
    }

    pub fn model_snapshot(&self) -> Value {
        self.model.snapshot()
    }

    pub fn has_changes(&self) -> bool {
        self.model.has_changes()
    }

    pub fn name(&self) -> ModelResult<Option<&str>> {
        Ok(self.model.read(GroupField::Name)?.and_then(Value::as_str))
    }

    pub fn set_name(&mut self, name: &str) -> ModelResult<()> {
        let mut slot = self.model.write_slot(GroupField::Name, Value::Null)?;
        *slot.ensure() = Value::from(name);
        Ok(())
    }

    /// `USER_CONTACT_GROUP` or `SYSTEM_CONTACT_GROUP` as sent by the remote
    /// source.
    pub fn group_type(&self) -> ModelResult<Option<&str>> {
        Ok(self
            .model
            .read(GroupField::GroupType)?
            .and_then(Value::as_str))
    }

    pub fn member_count(&self) -> ModelResult<Option<u64>> {
        match self.model.read(GroupField::MemberCount)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_u64().map(Some).ok_or(ModelError::UnexpectedShape {
                field: "memberCount",
                expected: "a non-negative integer",
            }),
        }
    }

    /// Member identifiers in document order; empty when the key is missing.
    pub fn member_resource_names(&self) -> Vec<&str> {
        self.model
            .read_unmasked(GROUP_FIELD_MEMBER_RESOURCE_NAMES)
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_member(&self, person: &Person) -> bool {
        self.member_resource_names()
            .into_iter()
            .any(|member| member == person.identifier())
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.model)
    }
}
