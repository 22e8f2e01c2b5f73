use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::{AccountId, Role, SESSION_TTL_DAYS, SessionClaims};

/// Token service failure.
///
/// Malformed, tampered, and expired tokens all collapse to `Invalid`:
/// callers must not be able to tell which check failed, and must not leak
/// the distinction to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid session token")]
    Invalid,

    #[error("token signing failed")]
    Signing,
}

/// Stateless HS256 session token service.
///
/// The signing secret is process-wide configuration, injected once at
/// construction and never re-read. There is no server-side token registry:
/// a token is valid iff its signature checks out and `exp` has not passed.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is exact: a token expired by one second must already fail.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::days(SESSION_TTL_DAYS),
        }
    }

    /// Issue a signed session token for `(account, role)`.
    ///
    /// Claims are `{sub, role, iat = now, exp = now + 7d}`. No side effects
    /// beyond CPU-bound signing; concurrent issues for the same account
    /// produce independently valid tokens.
    pub fn issue(&self, account: AccountId, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: account,
            role,
            iat: now,
            exp: now + self.ttl,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }

    /// Check signature integrity and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    fn service() -> TokenService {
        TokenService::new(SECRET)
    }

    fn mint(secret: &[u8], claims: &SessionClaims) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .expect("failed to encode token")
    }

    #[test]
    fn issue_then_verify_round_trips_claims() {
        let svc = service();
        let account = AccountId::new();

        let token = svc.issue(account, Role::Vendor).unwrap();
        let claims = svc.verify(&token).unwrap();

        assert_eq!(claims.sub, account);
        assert_eq!(claims.role, Role::Vendor);
        assert_eq!(claims.exp - claims.iat, Duration::days(SESSION_TTL_DAYS));
    }

    #[test]
    fn expired_token_fails_even_with_valid_signature() {
        let svc = service();
        let now = Utc::now();
        let token = mint(
            SECRET,
            &SessionClaims {
                sub: AccountId::new(),
                role: Role::Customer,
                iat: now - Duration::days(7),
                exp: now - Duration::seconds(10),
            },
        );

        assert_eq!(svc.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let svc = service();
        let now = Utc::now();
        let token = mint(
            b"some-other-secret",
            &SessionClaims {
                sub: AccountId::new(),
                role: Role::Sudo,
                iat: now,
                exp: now + Duration::days(7),
            },
        );

        assert_eq!(svc.verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn structurally_malformed_tokens_are_rejected() {
        let svc = service();
        for garbage in ["", "not-a-token", "a.b", "a.b.c.d", "....."] {
            assert_eq!(svc.verify(garbage), Err(TokenError::Invalid));
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const B64URL: &[u8] =
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

        proptest! {
            /// Any (account, role) pair survives an issue/verify round trip
            /// unchanged before expiry.
            #[test]
            fn round_trip_preserves_identity(
                uuid_bytes in proptest::array::uniform16(any::<u8>()),
                role_ix in 0usize..3,
            ) {
                let svc = service();
                let account = AccountId::from_uuid(uuid::Uuid::from_bytes(uuid_bytes));
                let role = [Role::Sudo, Role::Vendor, Role::Customer][role_ix];

                let token = svc.issue(account, role).unwrap();
                let claims = svc.verify(&token).unwrap();
                prop_assert_eq!(claims.sub, account);
                prop_assert_eq!(claims.role, role);
            }

            /// Replacing any single byte of a valid token fails closed.
            #[test]
            fn tampering_any_byte_fails_verification(
                seed in any::<u64>(),
                pos_seed in any::<usize>(),
                replacement_ix in 0usize..64,
            ) {
                let svc = service();
                let account = AccountId::from_uuid(uuid::Uuid::from_u64_pair(seed, seed));
                let token = svc.issue(account, Role::Vendor).unwrap();

                let mut bytes = token.clone().into_bytes();
                let pos = pos_seed % bytes.len();
                let mut replacement = B64URL[replacement_ix];
                if replacement == bytes[pos] {
                    // Pick a different in-alphabet byte so the token really changes.
                    replacement = B64URL[(replacement_ix + 1) % 64];
                }
                bytes[pos] = replacement;
                let tampered = String::from_utf8(bytes).unwrap();

                prop_assert_ne!(&tampered, &token);
                prop_assert_eq!(svc.verify(&tampered), Err(TokenError::Invalid));
            }
        }
    }
}
