//! Use-case services on top of the person facade.
//!
//! # Responsibility
//! - Combine facade and removal primitives into caller-level operations.
//! - Keep CLI callers free of list and criterion plumbing.

pub mod cleanup_service;

pub use cleanup_service::{CleanupReport, CleanupService};
