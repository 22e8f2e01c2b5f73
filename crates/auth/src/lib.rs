//! `marketgate-auth` — pure authentication boundary (roles, scopes, tokens, passwords).
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod password;
pub mod principal;
pub mod roles;
pub mod scope;
pub mod token;

pub use claims::SessionClaims;
pub use password::{BCRYPT_COST, PasswordError, hash_password, verify_password};
pub use principal::AccountId;
pub use roles::{Role, UnknownRole};
pub use scope::{SESSION_TTL_DAYS, SessionScope, UnknownScope};
pub use token::{TokenError, TokenService};
