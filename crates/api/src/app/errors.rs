use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Path scope segment did not name a session scope.
pub fn unknown_scope() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "unknown session scope")
}

/// The one closed response every authenticated-route failure maps to.
///
/// Identical for missing cookies, invalid tokens, role mismatches, and
/// storage failures, so callers cannot enumerate which stage failed.
pub fn unauthenticated() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "loggedIn": false })),
    )
        .into_response()
}
