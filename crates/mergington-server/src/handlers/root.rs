//! Front-end entry point.

use axum::response::Redirect;

/// `GET /`
///
/// Temporary (307) redirect to the static front-end.
pub async fn index() -> Redirect {
    Redirect::temporary("/static/index.html")
}
