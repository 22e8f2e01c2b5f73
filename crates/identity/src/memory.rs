//! In-memory credential directory for tests and local development.

use std::sync::RwLock;

use async_trait::async_trait;

use marketgate_auth::AccountId;

use crate::account::{AdminAccount, CustomerAccount, VendorAccount};
use crate::directory::{CredentialDirectory, DirectoryError};

/// In-memory directory backed by per-partition vectors.
///
/// - No IO / no pooling
/// - Linear scans (fixture-sized data)
/// - Seeding/removal helpers exist only here, not on the lookup trait
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    admins: RwLock<Vec<AdminAccount>>,
    vendors: RwLock<Vec<VendorAccount>>,
    customers: RwLock<Vec<CustomerAccount>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_admin(&self, account: AdminAccount) {
        if let Ok(mut rows) = self.admins.write() {
            rows.push(account);
        }
    }

    pub fn insert_vendor(&self, account: VendorAccount) {
        if let Ok(mut rows) = self.vendors.write() {
            rows.push(account);
        }
    }

    pub fn insert_customer(&self, account: CustomerAccount) {
        if let Ok(mut rows) = self.customers.write() {
            rows.push(account);
        }
    }

    /// Delete an account from every partition it appears in.
    pub fn remove(&self, id: AccountId) {
        if let Ok(mut rows) = self.admins.write() {
            rows.retain(|a| a.id != id);
        }
        if let Ok(mut rows) = self.vendors.write() {
            rows.retain(|a| a.id != id);
        }
        if let Ok(mut rows) = self.customers.write() {
            rows.retain(|a| a.id != id);
        }
    }
}

fn poisoned() -> DirectoryError {
    DirectoryError::Unavailable("directory lock poisoned".to_string())
}

#[async_trait]
impl CredentialDirectory for InMemoryDirectory {
    async fn admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, DirectoryError> {
        let rows = self.admins.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|a| a.username == username).cloned())
    }

    async fn admin_by_id(&self, id: AccountId) -> Result<Option<AdminAccount>, DirectoryError> {
        let rows = self.admins.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn vendor_by_username(
        &self,
        username: &str,
    ) -> Result<Option<VendorAccount>, DirectoryError> {
        let rows = self.vendors.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|a| a.username == username).cloned())
    }

    async fn vendor_by_id(&self, id: AccountId) -> Result<Option<VendorAccount>, DirectoryError> {
        let rows = self.vendors.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }

    async fn customer_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CustomerAccount>, DirectoryError> {
        let rows = self.customers.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|a| a.username == username).cloned())
    }

    async fn customer_by_id(
        &self,
        id: AccountId,
    ) -> Result<Option<CustomerAccount>, DirectoryError> {
        let rows = self.customers.read().map_err(|_| poisoned())?;
        Ok(rows.iter().find(|a| a.id == id).cloned())
    }
}
