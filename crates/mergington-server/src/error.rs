//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce a JSON body whose `detail` field
//! carries either a message string or a list of query validation issues.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mergington_core::CatalogError;

/// A single query-parameter validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// "missing" or "invalid".
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the offending value, e.g. `["query", "email"]`.
    pub loc: Vec<String>,
    /// Human-readable message.
    pub msg: String,
    /// The offending input; `null` when the value is absent.
    pub input: serde_json::Value,
}

impl ValidationIssue {
    /// A required query parameter was absent.
    pub fn missing_query(param: &str) -> Self {
        ValidationIssue {
            kind: "missing".to_string(),
            loc: vec!["query".to_string(), param.to_string()],
            msg: "Field required".to_string(),
            input: serde_json::Value::Null,
        }
    }
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request rejected by a domain rule (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Query string missing or malformed (422).
    #[error("unprocessable query: {} issue(s)", .0.len())]
    UnprocessableQuery(Vec<ValidationIssue>),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::Value::String(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, serde_json::Value::String(msg)),
            ApiError::UnprocessableQuery(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::to_value(issues).unwrap_or(serde_json::Value::Null),
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::Value::String(msg),
            ),
        };

        let body = serde_json::json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ActivityNotFound { .. } => {
                ApiError::NotFound("Activity not found".to_string())
            }
            CatalogError::AlreadyRegistered { .. } => {
                ApiError::BadRequest("Student is already signed up".to_string())
            }
            CatalogError::NotRegistered { .. } => {
                ApiError::BadRequest("Student is not registered for this activity".to_string())
            }
            CatalogError::CapacityExceeded { .. } => {
                ApiError::BadRequest("Activity is full".to_string())
            }
            CatalogError::InvalidSeed { .. } | CatalogError::SeedParse(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::UnprocessableQuery(vec![ValidationIssue {
            kind: "invalid".to_string(),
            loc: vec!["query".to_string()],
            msg: rejection.body_text(),
            input: serde_json::Value::Null,
        }])
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
