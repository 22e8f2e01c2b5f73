//! `marketgate-identity` — credential records, store lookup seam, and the
//! session-resolution pipeline.
//!
//! The crate owns the trust boundary between a verified token and a live
//! identity: a token's role claim only ever selects which store partition
//! to query; the persisted record decides whether the session is valid.

pub mod account;
pub mod directory;
pub mod memory;
pub mod resolver;

pub use account::{
    AdminAccount, AdminProfile, CustomerAccount, CustomerProfile, Profile, UserAccount,
    VendorAccount, VendorProfile,
};
pub use directory::{CredentialDirectory, DirectoryError};
pub use memory::InMemoryDirectory;
pub use resolver::{IdentityResolver, IssuedSession, LoginError, Resolution};
