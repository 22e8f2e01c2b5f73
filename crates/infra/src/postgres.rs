//! Postgres-backed credential directory.
//!
//! Expected schema (one table per partition):
//!
//! ```sql
//! CREATE TABLE admins (
//!     id            UUID PRIMARY KEY,
//!     username      TEXT NOT NULL UNIQUE,
//!     password_hash TEXT NOT NULL,
//!     role          TEXT NOT NULL,
//!     active        BOOLEAN NOT NULL DEFAULT TRUE
//! );
//! CREATE TABLE vendors (
//!     id            UUID PRIMARY KEY,
//!     username      TEXT NOT NULL UNIQUE,
//!     password_hash TEXT NOT NULL,
//!     role          TEXT NOT NULL,
//!     vendor_name   TEXT NOT NULL,
//!     email         TEXT NOT NULL,
//!     phone         TEXT NOT NULL,
//!     active        BOOLEAN NOT NULL DEFAULT TRUE
//! );
//! CREATE TABLE customers (LIKE vendors INCLUDING ALL); -- full_name instead of vendor_name
//! ```
//!
//! Usernames are unique per table, not across tables. Every sqlx failure
//! maps to [`DirectoryError::Unavailable`]; the resolver fails closed on it.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use marketgate_auth::{AccountId, Role};
use marketgate_identity::{
    AdminAccount, CredentialDirectory, CustomerAccount, DirectoryError, VendorAccount,
};

/// Credential directory over a shared Postgres pool.
///
/// `Send + Sync` and cheap to clone; the pool handles connection reuse.
/// Lookups are single parameterized SELECTs — the authentication path
/// never writes.
#[derive(Debug, Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> DirectoryError {
    tracing::error!(operation, error = %err, "credential directory query failed");
    DirectoryError::Unavailable(format!("{operation}: {err}"))
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    active: bool,
}

impl From<AdminRow> for AdminAccount {
    fn from(row: AdminRow) -> Self {
        Self {
            id: AccountId::from_uuid(row.id),
            username: row.username,
            password_hash: row.password_hash,
            role: row.role,
            active: row.active,
        }
    }
}

#[derive(Debug, FromRow)]
struct VendorRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    vendor_name: String,
    email: String,
    phone: String,
    active: bool,
}

impl TryFrom<VendorRow> for VendorAccount {
    type Error = DirectoryError;

    fn try_from(row: VendorRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| {
            DirectoryError::Unavailable(format!("vendor row {} has role {:?}", row.id, row.role))
        })?;
        Ok(Self {
            id: AccountId::from_uuid(row.id),
            username: row.username,
            password_hash: row.password_hash,
            role,
            vendor_name: row.vendor_name,
            email: row.email,
            phone: row.phone,
            active: row.active,
        })
    }
}

#[derive(Debug, FromRow)]
struct CustomerRow {
    id: Uuid,
    username: String,
    password_hash: String,
    role: String,
    full_name: String,
    email: String,
    phone: String,
    active: bool,
}

impl TryFrom<CustomerRow> for CustomerAccount {
    type Error = DirectoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| {
            DirectoryError::Unavailable(format!("customer row {} has role {:?}", row.id, row.role))
        })?;
        Ok(Self {
            id: AccountId::from_uuid(row.id),
            username: row.username,
            password_hash: row.password_hash,
            role,
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            active: row.active,
        })
    }
}

#[async_trait]
impl CredentialDirectory for PgDirectory {
    async fn admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, AdminRow>("SELECT id, username, password_hash, role, active FROM admins WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("admin_by_username", e))?;

        Ok(row.map(AdminAccount::from))
    }

    async fn admin_by_id(&self, id: AccountId) -> Result<Option<AdminAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, AdminRow>("SELECT id, username, password_hash, role, active FROM admins WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("admin_by_id", e))?;

        Ok(row.map(AdminAccount::from))
    }

    async fn vendor_by_username(
        &self,
        username: &str,
    ) -> Result<Option<VendorAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, VendorRow>("SELECT id, username, password_hash, role, vendor_name, email, phone, active FROM vendors WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("vendor_by_username", e))?;

        row.map(VendorAccount::try_from).transpose()
    }

    async fn vendor_by_id(&self, id: AccountId) -> Result<Option<VendorAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, VendorRow>("SELECT id, username, password_hash, role, vendor_name, email, phone, active FROM vendors WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("vendor_by_id", e))?;

        row.map(VendorAccount::try_from).transpose()
    }

    async fn customer_by_username(
        &self,
        username: &str,
    ) -> Result<Option<CustomerAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT id, username, password_hash, role, full_name, email, phone, active FROM customers WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("customer_by_username", e))?;

        row.map(CustomerAccount::try_from).transpose()
    }

    async fn customer_by_id(
        &self,
        id: AccountId,
    ) -> Result<Option<CustomerAccount>, DirectoryError> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT id, username, password_hash, role, full_name, email, phone, active FROM customers WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("customer_by_id", e))?;

        row.map(CustomerAccount::try_from).transpose()
    }
}
