use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role a session token can claim.
///
/// The persisted role column is authoritative; a token's role claim is
/// only ever an index into the store partitions and must be re-checked
/// against the live record before a session is trusted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sudo,
    Vendor,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sudo => "sudo",
            Role::Vendor => "vendor",
            Role::Customer => "customer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sudo" => Ok(Role::Sudo),
            "vendor" => Ok(Role::Vendor),
            "customer" => Ok(Role::Customer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
