use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Role};

/// Claims carried by a session token.
///
/// A token is a capability, not a reference into server state: validity is
/// entirely a function of signature correctness and expiry. `iat`/`exp`
/// serialize as UNIX seconds so standard JWT expiry validation applies to
/// the encoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the account this session belongs to.
    pub sub: AccountId,

    /// Role claimed at issuance. Never trusted in isolation; the resolver
    /// re-checks it against the persisted role on every request.
    pub role: Role,

    /// Issued-at timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub iat: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub exp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_serialize_as_unix_seconds() {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: AccountId::new(),
            role: Role::Customer,
            iat: now,
            exp: now + chrono::Duration::days(7),
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["iat"], serde_json::json!(now.timestamp()));
        assert_eq!(
            value["exp"],
            serde_json::json!((now + chrono::Duration::days(7)).timestamp())
        );
        assert_eq!(value["role"], serde_json::json!("customer"));
    }
}
