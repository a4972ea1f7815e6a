//! Request/response types for the activities API.

use serde::{Deserialize, Serialize};

/// Query string of the signup and unregister endpoints.
///
/// Deserialized from the raw key/value pairs so a repeated `email` resolves
/// to its last value. `email` stays optional so a missing parameter reaches
/// the handler and is reported as a 422 validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl From<Vec<(String, String)>> for EmailQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value);
        EmailQuery { email }
    }
}

/// Confirmation returned by successful writes.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
