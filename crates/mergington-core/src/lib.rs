//! Core domain model for the Mergington High School activities service.
//!
//! The [`Catalog`] owns every [`Activity`] and is the only place participant
//! lists are mutated. It is a plain value: the server wraps it in an `Arc`
//! and hands it to handlers, tests construct their own.

pub mod activity;
pub mod catalog;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use activity::Activity;
pub use catalog::{CapacityPolicy, Catalog, CatalogSnapshot, Confirmation};
pub use error::CatalogError;
