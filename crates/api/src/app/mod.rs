//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one parametrized session triad)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;

use marketgate_auth::TokenService;
use marketgate_identity::{CredentialDirectory, IdentityResolver};

use crate::config::AppConfig;
use crate::cookies::SessionCookies;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared request state: the resolver and the cookie manager.
///
/// Both are constructed once from [`AppConfig`]; requests share them
/// read-only.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<IdentityResolver>,
    pub cookies: SessionCookies,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig, directory: Arc<dyn CredentialDirectory>) -> Router {
    let tokens = TokenService::new(config.token_secret.as_bytes());
    let state = AppState {
        resolver: Arc::new(IdentityResolver::new(tokens, directory)),
        cookies: SessionCookies::new(config.production),
    };

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .with_state(state)
        .layer(ServiceBuilder::new())
}
