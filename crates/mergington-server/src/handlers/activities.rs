//! Activity listing, signup, and unregister handlers.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use mergington_core::CatalogSnapshot;

use crate::error::{ApiError, ValidationIssue};
use crate::schema::activities::{EmailQuery, MessageResponse};
use crate::state::AppState;

/// Lists every activity.
///
/// `GET /activities`
pub async fn list_activities(State(state): State<AppState>) -> Json<CatalogSnapshot> {
    let activities = state.catalog.list_activities();
    tracing::debug!("listing {} activities", activities.len());
    Json(activities)
}

/// Signs a student up for an activity.
///
/// `POST /activities/{activity_name}/signup?email=...`
pub async fn signup(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let email = required_email(query)?;
    let confirmation = state.catalog.signup(&activity_name, &email)?;
    tracing::debug!("signed up {:?} for {:?}", email, activity_name);
    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}

/// Removes a student from an activity.
///
/// `DELETE /activities/{activity_name}/unregister?email=...`
pub async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity_name) = path?;
    let email = required_email(query)?;
    let confirmation = state.catalog.unregister(&activity_name, &email)?;
    tracing::debug!("unregistered {:?} from {:?}", email, activity_name);
    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}

fn required_email(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    let Query(query) = query?;
    query
        .email
        .ok_or_else(|| ApiError::UnprocessableQuery(vec![ValidationIssue::missing_query("email")]))
}
