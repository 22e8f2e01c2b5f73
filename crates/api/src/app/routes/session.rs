//! The parametrized login/me/logout triad.
//!
//! `{scope}` selects cookie name, store partition, and trust checks; the
//! handlers themselves are identical across principal surfaces.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;

use marketgate_auth::SessionScope;
use marketgate_identity::{LoginError, Resolution};

use crate::app::{AppState, dto, errors};
use crate::cookies::SessionCookies;

/// `POST /login/{scope}` — authenticate and set the scope's session cookie.
///
/// The only endpoint allowed to distinguish failure causes: no session
/// secret exists yet, so 404/401/500 leak nothing a session could lose.
pub async fn login(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    jar: CookieJar,
    Json(body): Json<dto::LoginRequest>,
) -> Response {
    let Ok(scope) = scope.parse::<SessionScope>() else {
        return errors::unknown_scope();
    };

    match state
        .resolver
        .login(scope, &body.username, &body.password)
        .await
    {
        Ok(session) => {
            let jar = jar.add(state.cookies.issue(scope, session.token));
            (
                StatusCode::OK,
                jar,
                Json(serde_json::json!({ "message": "login successful" })),
            )
                .into_response()
        }
        Err(LoginError::UnknownAccount) => {
            errors::json_error(StatusCode::NOT_FOUND, "not_found", "account not found")
        }
        Err(LoginError::BadPassword) => {
            errors::json_error(StatusCode::UNAUTHORIZED, "unauthorized", "invalid credentials")
        }
        Err(LoginError::Unavailable) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "authentication unavailable",
        ),
    }
}

/// `GET /me/{scope}` — resolve the session cookie into an identity.
///
/// Every failure answers with the same `401 {"loggedIn": false}` shape.
pub async fn me(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> Response {
    let Ok(scope) = scope.parse::<SessionScope>() else {
        return errors::unknown_scope();
    };

    let Some(token) = extract_token(&jar, &headers, scope) else {
        return errors::unauthenticated();
    };

    match state.resolver.resolve(scope, &token).await {
        Resolution::Authenticated { profile, .. } => {
            let Ok(profile) = serde_json::to_value(&profile) else {
                return errors::unauthenticated();
            };
            let mut body = serde_json::json!({ "loggedIn": true });
            body[profile_key(scope)] = profile;
            (StatusCode::OK, Json(body)).into_response()
        }
        Resolution::Unauthenticated => errors::unauthenticated(),
    }
}

/// `POST /logout/{scope}` — clear the scope's session cookie.
///
/// Stateless sessions need no token-service interaction here; the
/// cache-suppressing headers keep intermediaries from replaying a stale
/// authenticated page after logout.
pub async fn logout(
    State(state): State<AppState>,
    Path(scope): Path<String>,
    jar: CookieJar,
) -> Response {
    let Ok(scope) = scope.parse::<SessionScope>() else {
        return errors::unknown_scope();
    };

    let jar = jar.add(state.cookies.clear(scope));
    (
        StatusCode::OK,
        [
            (header::CACHE_CONTROL, "no-store"),
            (header::PRAGMA, "no-cache"),
        ],
        jar,
        Json(serde_json::json!({ "success": true })),
    )
        .into_response()
}

/// One extraction interface, two adapters: the structured jar first, the
/// raw `Cookie` header as the equivalent fallback entry point.
fn extract_token(jar: &CookieJar, headers: &HeaderMap, scope: SessionScope) -> Option<String> {
    SessionCookies::read(jar, scope).or_else(|| {
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| SessionCookies::read_raw(raw, scope))
    })
}

/// Response key the client contract expects the profile under.
fn profile_key(scope: SessionScope) -> &'static str {
    match scope {
        SessionScope::Sudo | SessionScope::Admin => "admin",
        SessionScope::Vendor => "vendor",
        SessionScope::Customer => "customer",
        SessionScope::User => "user",
    }
}
