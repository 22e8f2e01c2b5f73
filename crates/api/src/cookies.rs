//! Session cookie manager.
//!
//! One attribute set for every session cookie: `HttpOnly`, `SameSite=Lax`,
//! `Path=/`, `Secure` in production. `issue` and `clear` emit the same
//! attributes so clients that validate attribute consistency still honor
//! the deletion.

use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use marketgate_auth::{SESSION_TTL_DAYS, SessionScope};

/// Builds, clears, and reads the per-scope session cookies.
#[derive(Debug, Clone, Copy)]
pub struct SessionCookies {
    secure: bool,
}

impl SessionCookies {
    /// `secure` must be true exactly when the deployment is production.
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    fn base(&self, scope: SessionScope, value: String) -> Cookie<'static> {
        Cookie::build((scope.cookie_name(), value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .build()
    }

    /// Session cookie carrying `token`.
    ///
    /// The max-age matches the token TTL; cookie and token expire
    /// together.
    pub fn issue(&self, scope: SessionScope, token: String) -> Cookie<'static> {
        let mut cookie = self.base(scope, token);
        cookie.set_max_age(Duration::days(SESSION_TTL_DAYS));
        cookie
    }

    /// Expired twin of [`Self::issue`]: empty value, expiry at the epoch —
    /// strictly in the past for any client clock.
    pub fn clear(&self, scope: SessionScope) -> Cookie<'static> {
        let mut cookie = self.base(scope, String::new());
        cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
        cookie
    }

    /// Extract the raw token for `scope` from a structured jar.
    ///
    /// Pure extraction, no validation; verification belongs to the
    /// resolver.
    pub fn read(jar: &CookieJar, scope: SessionScope) -> Option<String> {
        jar.get(scope.cookie_name())
            .map(|cookie| cookie.value().to_string())
    }

    /// Raw `Cookie:` header adapter; same contract as [`Self::read`].
    pub fn read_raw(header: &str, scope: SessionScope) -> Option<String> {
        header.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == scope.cookie_name()).then(|| value.to_string())
        })
    }
}
