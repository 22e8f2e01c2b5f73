use serde::Serialize;

use marketgate_auth::{AccountId, Role};

// ─────────────────────────────────────────────────────────────────────────────
// Store records
// ─────────────────────────────────────────────────────────────────────────────
//
// Records carry the password hash and never derive `Serialize`; anything
// that leaves this crate goes through the profile projections below.

/// Row in the admin partition.
///
/// The admin partition holds platform operators of several kinds, so its
/// persisted role is a free-form string rather than the token [`Role`]
/// enum. Only rows whose role is literally `"sudo"` pass the sudo trust
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub active: bool,
}

impl AdminAccount {
    pub fn is_sudo(&self) -> bool {
        self.role == "sudo"
    }
}

/// Row in the vendor partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorAccount {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub vendor_name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
}

/// Row in the customer partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerAccount {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
}

/// A row from the unified vendor-or-customer union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAccount {
    Vendor(VendorAccount),
    Customer(CustomerAccount),
}

impl UserAccount {
    pub fn id(&self) -> AccountId {
        match self {
            UserAccount::Vendor(v) => v.id,
            UserAccount::Customer(c) => c.id,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            UserAccount::Vendor(v) => v.role,
            UserAccount::Customer(c) => c.role,
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            UserAccount::Vendor(v) => &v.password_hash,
            UserAccount::Customer(c) => &c.password_hash,
        }
    }

    pub fn active(&self) -> bool {
        match self {
            UserAccount::Vendor(v) => v.active,
            UserAccount::Customer(c) => c.active,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile projections
// ─────────────────────────────────────────────────────────────────────────────

/// Public-safe projection of an admin row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: AccountId,
    pub username: String,
    pub role: String,
    pub active: bool,
}

/// Public-safe projection of a vendor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    pub id: AccountId,
    pub vendor_name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
}

/// Public-safe projection of a customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub id: AccountId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
}

/// Identity proof returned to authenticated callers.
///
/// Serializes as the bare profile object (no enum tag); the HTTP layer
/// decides which response key to put it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Profile {
    Admin(AdminProfile),
    Vendor(VendorProfile),
    Customer(CustomerProfile),
}

impl Profile {
    pub fn id(&self) -> AccountId {
        match self {
            Profile::Admin(p) => p.id,
            Profile::Vendor(p) => p.id,
            Profile::Customer(p) => p.id,
        }
    }
}

impl From<&AdminAccount> for AdminProfile {
    fn from(account: &AdminAccount) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role.clone(),
            active: account.active,
        }
    }
}

impl From<&VendorAccount> for VendorProfile {
    fn from(account: &VendorAccount) -> Self {
        Self {
            id: account.id,
            vendor_name: account.vendor_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            active: account.active,
        }
    }
}

impl From<&CustomerAccount> for CustomerProfile {
    fn from(account: &CustomerAccount) -> Self {
        Self {
            id: account.id,
            full_name: account.full_name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            active: account.active,
        }
    }
}

impl From<&UserAccount> for Profile {
    fn from(account: &UserAccount) -> Self {
        match account {
            UserAccount::Vendor(v) => Profile::Vendor(v.into()),
            UserAccount::Customer(c) => Profile::Customer(c.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor() -> VendorAccount {
        VendorAccount {
            id: AccountId::new(),
            username: "v1".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            role: Role::Vendor,
            vendor_name: "Acme Catering".to_string(),
            email: "ops@acme.example".to_string(),
            phone: "+15550100".to_string(),
            active: true,
        }
    }

    #[test]
    fn vendor_profile_uses_camel_case_and_drops_the_hash() {
        let account = vendor();
        let profile = Profile::Vendor((&account).into());
        let value = serde_json::to_value(&profile).unwrap();

        assert_eq!(value["vendorName"], "Acme Catering");
        assert_eq!(value["id"], account.id.to_string());
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
        assert!(!value.to_string().contains("secret"));
    }

    #[test]
    fn union_projection_matches_variant() {
        let account = UserAccount::Vendor(vendor());
        assert!(matches!((&account).into(), Profile::Vendor(_)));
        assert_eq!(account.role(), Role::Vendor);
    }
}
