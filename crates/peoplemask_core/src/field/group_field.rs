//! Attribute vocabulary of contact-group resources.

use super::MaskField;
use std::fmt::{Display, Formatter};

/// Requestable attributes of a contact group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupField {
    ClientData,
    GroupType,
    MemberCount,
    Metadata,
    Name,
}

const ALL_GROUP_FIELDS: &[GroupField] = &[
    GroupField::ClientData,
    GroupField::GroupType,
    GroupField::MemberCount,
    GroupField::Metadata,
    GroupField::Name,
];

impl MaskField for GroupField {
    fn wire_key(self) -> &'static str {
        match self {
            Self::ClientData => "clientData",
            Self::GroupType => "groupType",
            Self::MemberCount => "memberCount",
            Self::Metadata => "metadata",
            Self::Name => "name",
        }
    }

    fn all() -> &'static [Self] {
        ALL_GROUP_FIELDS
    }
}

impl Display for GroupField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_key())
    }
}
