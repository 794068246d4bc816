//! Typed projections over list-valued document attributes.
//!
//! # Responsibility
//! - Expose each list attribute as a sequence of typed item views that
//!   read and write through to the owning document.
//! - Provide shared query and removal combinators for item capabilities.
//!
//! # Invariants
//! - Views hold references into the document, never copies. A write
//!   through an item is immediately visible in the model snapshot.
//! - Read-only projections never create missing attributes. Only an
//!   append materializes an absent list.
//!
//! # See also
//! - `crate::person` for the concrete item kinds.

pub mod item;
pub mod projection;
pub mod removal;

pub use item::{
    HasDateValue, HasStringValue, HasTypeTag, Item, ItemKind, ItemMut, ItemRef,
    ITEM_FIELD_DATE, ITEM_FIELD_FORMATTED_TYPE, ITEM_FIELD_TYPE, ITEM_FIELD_VALUE,
};
pub use projection::{ListAttribute, ListView};
pub use removal::{
    select_candidates, MatchAll, MatchDateValue, MatchStringValue, MatchTypeTag,
    RemovalStrategy, RemoveCriterion, Removal,
};
