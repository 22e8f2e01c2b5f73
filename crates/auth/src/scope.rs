use core::str::FromStr;

use thiserror::Error;

use crate::Role;

/// Session lifetime shared by tokens and cookies.
///
/// `TokenService::issue` and the cookie manager must agree on this value,
/// otherwise a cookie can outlive (or underlive) its token.
pub const SESSION_TTL_DAYS: i64 = 7;

/// The principal surface a request authenticates against.
///
/// Each scope owns a dedicated cookie name so sessions for different
/// surfaces can coexist in one browser. `Vendor` and `Customer` share one
/// cookie, so a browser holds at most one vendor-or-customer session at a
/// time; a sudo session and an admin-panel session are independent of it.
///
/// This is the lookup table that replaces per-role copies of the
/// login/me/logout flow: scope → cookie name → accepted roles → TTL.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SessionScope {
    /// Platform super-admin surface.
    Sudo,
    /// Admin-panel check. Verify-only: this core never issues under it.
    Admin,
    Vendor,
    Customer,
    /// Unified vendor-or-customer surface.
    User,
}

impl SessionScope {
    pub const ALL: [SessionScope; 5] = [
        SessionScope::Sudo,
        SessionScope::Admin,
        SessionScope::Vendor,
        SessionScope::Customer,
        SessionScope::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionScope::Sudo => "sudo",
            SessionScope::Admin => "admin",
            SessionScope::Vendor => "vendor",
            SessionScope::Customer => "customer",
            SessionScope::User => "user",
        }
    }

    /// Name of the HTTP cookie carrying this scope's session token.
    pub fn cookie_name(&self) -> &'static str {
        match self {
            SessionScope::Sudo => "sudo_token",
            SessionScope::Admin => "admin_token",
            SessionScope::Vendor | SessionScope::Customer => "token",
            SessionScope::User => "user_token",
        }
    }

    /// Token roles this scope accepts at resolution time.
    pub fn accepts(&self, role: Role) -> bool {
        match self {
            SessionScope::Sudo | SessionScope::Admin => role == Role::Sudo,
            SessionScope::Vendor => role == Role::Vendor,
            SessionScope::Customer => role == Role::Customer,
            SessionScope::User => matches!(role, Role::Vendor | Role::Customer),
        }
    }

    /// Whether login may issue sessions under this scope.
    pub fn issues_sessions(&self) -> bool {
        !matches!(self, SessionScope::Admin)
    }
}

impl core::fmt::Display for SessionScope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown session scope: {0}")]
pub struct UnknownScope(pub String);

impl FromStr for SessionScope {
    type Err = UnknownScope;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sudo" => Ok(SessionScope::Sudo),
            "admin" => Ok(SessionScope::Admin),
            "vendor" => Ok(SessionScope::Vendor),
            "customer" => Ok(SessionScope::Customer),
            "user" => Ok(SessionScope::User),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_and_customer_share_a_cookie() {
        assert_eq!(
            SessionScope::Vendor.cookie_name(),
            SessionScope::Customer.cookie_name()
        );
    }

    #[test]
    fn dedicated_cookies_do_not_collide() {
        assert_ne!(
            SessionScope::Sudo.cookie_name(),
            SessionScope::Admin.cookie_name()
        );
        assert_ne!(
            SessionScope::Sudo.cookie_name(),
            SessionScope::User.cookie_name()
        );
        assert_ne!(
            SessionScope::User.cookie_name(),
            SessionScope::Vendor.cookie_name()
        );
    }

    #[test]
    fn user_scope_accepts_both_store_roles() {
        assert!(SessionScope::User.accepts(Role::Vendor));
        assert!(SessionScope::User.accepts(Role::Customer));
        assert!(!SessionScope::User.accepts(Role::Sudo));
    }

    #[test]
    fn vendor_scope_rejects_customer_tokens() {
        assert!(SessionScope::Vendor.accepts(Role::Vendor));
        assert!(!SessionScope::Vendor.accepts(Role::Customer));
    }

    #[test]
    fn admin_scope_is_verify_only() {
        assert!(!SessionScope::Admin.issues_sessions());
        for scope in [
            SessionScope::Sudo,
            SessionScope::Vendor,
            SessionScope::Customer,
            SessionScope::User,
        ] {
            assert!(scope.issues_sessions());
        }
    }

    #[test]
    fn scope_round_trips_through_str() {
        for scope in SessionScope::ALL {
            assert_eq!(scope.as_str().parse::<SessionScope>().unwrap(), scope);
        }
        assert!("root".parse::<SessionScope>().is_err());
    }
}
