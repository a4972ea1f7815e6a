//! Core error types for mergington-core.
//!
//! Uses `thiserror` for structured, matchable variants. The server maps each
//! variant to a fixed HTTP status and `detail` string.

use thiserror::Error;

/// Errors produced by catalog operations and seed loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No activity with this name exists in the catalog.
    #[error("activity not found: '{name}'")]
    ActivityNotFound { name: String },

    /// The email is already in the activity's participant list.
    #[error("'{email}' is already signed up for '{activity}'")]
    AlreadyRegistered { activity: String, email: String },

    /// The email is not in the activity's participant list.
    #[error("'{email}' is not registered for '{activity}'")]
    NotRegistered { activity: String, email: String },

    /// Signup would push the activity past `max_participants`.
    #[error("'{activity}' is full ({max} participants)")]
    CapacityExceeded { activity: String, max: u32 },

    /// A seed catalog violates a catalog invariant.
    #[error("invalid seed: {reason}")]
    InvalidSeed { reason: String },

    /// A seed file could not be parsed.
    #[error("seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),
}
