//! Typed, field-mask aware access to contact documents.
//!
//! Remote contact APIs return partial JSON documents shaped by a field mask.
//! This crate wraps such a document, exposes its list attributes as typed
//! item views, and produces an updated document ready to send back.

pub mod field;
pub mod group;
pub mod list;
pub mod logging;
pub mod model;
pub mod person;
pub mod service;

pub use field::{FieldMask, FieldParseError, GroupField, MaskField, PersonField};
pub use group::Group;
pub use list::{ItemMut, ItemRef, ListAttribute, ListView, Removal, RemoveCriterion};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::{DateValue, DateValueError, DateValueVisitor, ModelError, ModelResult};
pub use person::Person;
pub use service::{CleanupReport, CleanupService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
