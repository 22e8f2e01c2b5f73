use axum::{
    Router,
    routing::{get, post},
};

use crate::app::AppState;

pub mod session;
pub mod system;

/// Router for the session endpoints.
///
/// One triad serves every principal surface; the `{scope}` segment picks
/// the cookie name, store partition, and trust checks.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login/:scope", post(session::login))
        .route("/me/:scope", get(session::me))
        .route("/logout/:scope", post(session::logout))
}
