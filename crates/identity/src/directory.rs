use async_trait::async_trait;
use thiserror::Error;

use marketgate_auth::AccountId;

use crate::account::{AdminAccount, CustomerAccount, UserAccount, VendorAccount};

/// Failure raised by a credential directory.
///
/// The message is internal detail for logs; callers on the authentication
/// path must fail closed and never surface it to clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("credential directory unavailable: {0}")]
    Unavailable(String),
}

/// Lookup seam over the three credential partitions.
///
/// Read-only by design: the authentication path performs no writes.
/// `Ok(None)` means the record does not exist (or, equivalently for
/// callers, must be treated as such).
#[async_trait]
pub trait CredentialDirectory: Send + Sync {
    async fn admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, DirectoryError>;

    async fn admin_by_id(&self, id: AccountId) -> Result<Option<AdminAccount>, DirectoryError>;

    async fn vendor_by_username(
        &self,
        username: &str,
    ) -> Result<Option<VendorAccount>, DirectoryError>;

    async fn vendor_by_id(&self, id: AccountId) -> Result<Option<VendorAccount>, DirectoryError>;

    async fn customer_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CustomerAccount>, DirectoryError>;

    async fn customer_by_id(
        &self,
        id: AccountId,
    ) -> Result<Option<CustomerAccount>, DirectoryError>;

    /// Union lookup over the vendor and customer partitions.
    ///
    /// Usernames are unique within a partition, not across partitions;
    /// the vendor partition wins a cross-partition collision.
    async fn user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserAccount>, DirectoryError> {
        if let Some(vendor) = self.vendor_by_username(username).await? {
            return Ok(Some(UserAccount::Vendor(vendor)));
        }
        Ok(self
            .customer_by_username(username)
            .await?
            .map(UserAccount::Customer))
    }
}
