use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use marketgate_auth::{AccountId, Role, SessionScope, TokenService, verify_password};

use crate::account::Profile;
use crate::directory::{CredentialDirectory, DirectoryError};

/// Outcome of resolving a raw session token under a scope.
///
/// Per-request state machine: token extracted → verified → partition
/// fetch → persisted-role cross-check. `Authenticated` is the only edge
/// that grants access; every other edge — missing/invalid token, unknown
/// id, role mismatch, inactive account, storage failure — collapses to
/// `Unauthenticated` with no observable intermediate state.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Authenticated { role: Role, profile: Profile },
    Unauthenticated,
}

/// Login failure. Distinguishable outcomes exist only here, before any
/// session secret is at risk; authenticated-route failures are uniform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// No usable account under that username in the scope's partition.
    /// Also covers inactive accounts and scopes that never issue.
    #[error("account not found")]
    UnknownAccount,

    #[error("invalid credentials")]
    BadPassword,

    /// Credential directory or token service failed.
    #[error("authentication unavailable")]
    Unavailable,
}

/// A freshly issued session: the signed token plus the identity it proves.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedSession {
    pub token: String,
    pub role: Role,
    pub profile: Profile,
}

/// Internal login candidate: one shape for all partitions, so the login
/// pipeline stays free of per-scope branches past the lookup.
struct Candidate {
    id: AccountId,
    role: Role,
    password_hash: String,
    active: bool,
    profile: Profile,
}

/// Login and session-resolution pipeline, parametrized by [`SessionScope`].
///
/// One instance serves every scope; the scope value selects the store
/// partition and the trust checks, not the control flow.
pub struct IdentityResolver {
    tokens: TokenService,
    directory: Arc<dyn CredentialDirectory>,
}

impl IdentityResolver {
    pub fn new(tokens: TokenService, directory: Arc<dyn CredentialDirectory>) -> Self {
        Self { tokens, directory }
    }

    /// Authenticate a username/password pair and issue a session token.
    ///
    /// Inactive accounts are treated as non-existent, as is any record
    /// whose persisted role the scope does not accept.
    pub async fn login(
        &self,
        scope: SessionScope,
        username: &str,
        password: &str,
    ) -> Result<IssuedSession, LoginError> {
        if !scope.issues_sessions() {
            return Err(LoginError::UnknownAccount);
        }

        let candidate = self.login_candidate(scope, username).await.map_err(|err| {
            warn!(scope = %scope, error = %err, "credential lookup failed during login");
            LoginError::Unavailable
        })?;

        let Some(candidate) = candidate else {
            debug!(scope = %scope, "login rejected: no usable account");
            return Err(LoginError::UnknownAccount);
        };
        if !candidate.active {
            debug!(scope = %scope, account = %candidate.id, "login rejected: inactive account");
            return Err(LoginError::UnknownAccount);
        }

        if !verify_password(password, &candidate.password_hash) {
            info!(scope = %scope, account = %candidate.id, "login rejected: bad password");
            return Err(LoginError::BadPassword);
        }

        let token = self
            .tokens
            .issue(candidate.id, candidate.role)
            .map_err(|err| {
                warn!(scope = %scope, error = %err, "token issuance failed");
                LoginError::Unavailable
            })?;

        info!(scope = %scope, account = %candidate.id, role = %candidate.role, "login succeeded");
        Ok(IssuedSession {
            token,
            role: candidate.role,
            profile: candidate.profile,
        })
    }

    /// Resolve a raw token (as extracted from a cookie) into an identity.
    ///
    /// Fail closed: storage errors resolve to `Unauthenticated` exactly
    /// like a missing record, and are only distinguishable in the logs.
    pub async fn resolve(&self, scope: SessionScope, raw_token: &str) -> Resolution {
        let Ok(claims) = self.tokens.verify(raw_token) else {
            return Resolution::Unauthenticated;
        };
        if !scope.accepts(claims.role) {
            return Resolution::Unauthenticated;
        }

        match self.fetch_live(scope, claims.sub, claims.role).await {
            Ok(Some(profile)) => Resolution::Authenticated {
                role: claims.role,
                profile,
            },
            Ok(None) => Resolution::Unauthenticated,
            Err(err) => {
                warn!(scope = %scope, error = %err, "credential lookup failed; failing closed");
                Resolution::Unauthenticated
            }
        }
    }

    async fn login_candidate(
        &self,
        scope: SessionScope,
        username: &str,
    ) -> Result<Option<Candidate>, DirectoryError> {
        let candidate = match scope {
            SessionScope::Sudo => {
                self.directory
                    .admin_by_username(username)
                    .await?
                    // The admin partition also holds non-sudo operator rows;
                    // they cannot log into the sudo surface.
                    .filter(|a| a.is_sudo())
                    .map(|a| Candidate {
                        id: a.id,
                        role: Role::Sudo,
                        profile: Profile::Admin((&a).into()),
                        active: a.active,
                        password_hash: a.password_hash,
                    })
            }
            SessionScope::Vendor => self
                .directory
                .vendor_by_username(username)
                .await?
                .filter(|a| a.role == Role::Vendor)
                .map(|a| Candidate {
                    id: a.id,
                    role: a.role,
                    profile: Profile::Vendor((&a).into()),
                    active: a.active,
                    password_hash: a.password_hash,
                }),
            SessionScope::Customer => self
                .directory
                .customer_by_username(username)
                .await?
                .filter(|a| a.role == Role::Customer)
                .map(|a| Candidate {
                    id: a.id,
                    role: a.role,
                    profile: Profile::Customer((&a).into()),
                    active: a.active,
                    password_hash: a.password_hash,
                }),
            SessionScope::User => self
                .directory
                .user_by_username(username)
                .await?
                .filter(|a| scope.accepts(a.role()))
                .map(|a| Candidate {
                    id: a.id(),
                    role: a.role(),
                    profile: (&a).into(),
                    active: a.active(),
                    password_hash: a.password_hash().to_string(),
                }),
            // Verify-only; unreachable past the issues_sessions gate.
            SessionScope::Admin => None,
        };
        Ok(candidate)
    }

    /// Fetch the live record behind a verified claim set.
    ///
    /// The role claim selects the partition to query; the persisted row
    /// decides. Missing, role-mismatched, and inactive rows all yield
    /// `None`.
    async fn fetch_live(
        &self,
        scope: SessionScope,
        id: AccountId,
        claimed: Role,
    ) -> Result<Option<Profile>, DirectoryError> {
        let profile = match claimed {
            Role::Sudo => self
                .directory
                .admin_by_id(id)
                .await?
                .filter(|a| a.active)
                // The admin-panel scope accepts any operator row; the sudo
                // scope requires the persisted role to be literally "sudo".
                .filter(|a| scope != SessionScope::Sudo || a.is_sudo())
                .map(|a| Profile::Admin((&a).into())),
            Role::Vendor => self
                .directory
                .vendor_by_id(id)
                .await?
                .filter(|a| a.active && a.role == Role::Vendor)
                .map(|a| Profile::Vendor((&a).into())),
            Role::Customer => self
                .directory
                .customer_by_id(id)
                .await?
                .filter(|a| a.active && a.role == Role::Customer)
                .map(|a| Profile::Customer((&a).into())),
        };
        Ok(profile)
    }
}
