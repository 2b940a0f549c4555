//! User entity model.

use serde::{Deserialize, Serialize};

use super::preferences::Preferences;
use super::quota::Quota;
use super::role::Role;

/// Id of the built-in root admin account.
pub const ADMIN_ID: u64 = 0;

/// Id of the built-in visitor account.
pub const VISITOR_ID: u64 = 1;

/// Name of the built-in visitor account.
pub const VISITOR_NAME: &str = "visitor";

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: u64,
    /// Unique login name.
    pub name: String,
    /// Password hash. Never serialized.
    #[serde(skip_serializing, default)]
    pub pwd: String,
    /// Assigned role.
    pub role: Role,
    /// Bytes currently stored by the user.
    #[serde(default)]
    pub used_space: i64,
    /// Space and transfer limits.
    pub quota: Quota,
    /// Client preferences.
    #[serde(default)]
    pub preferences: Preferences,
}

impl User {
    /// Whether this is one of the built-in accounts that can never be deleted.
    pub fn is_reserved_id(id: u64) -> bool {
        id == ADMIN_ID || id == VISITOR_ID
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Partial update of a user's administrative fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoUpdate {
    /// New role, if changing.
    pub role: Option<Role>,
    /// New quota, if changing.
    pub quota: Option<Quota>,
    /// Corrected used-space counter, if changing.
    pub used_space: Option<i64>,
}

impl UserInfoUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.quota.is_none() && self.used_space.is_none()
    }
}
