//! Role identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named permission tier.
///
/// Roles are opaque strings. Three are predefined and can never be added or
/// removed: `admin`, `user` and `visitor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Full access.
    pub const ADMIN: &'static str = "admin";
    /// Authenticated non-admin.
    pub const USER: &'static str = "user";
    /// Unauthenticated caller.
    pub const VISITOR: &'static str = "visitor";

    /// The predefined role names, in privilege order.
    pub const PREDEFINED: [&'static str; 3] = [Self::ADMIN, Self::USER, Self::VISITOR];

    /// Wraps a role name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn admin() -> Self {
        Self::new(Self::ADMIN)
    }

    pub fn user() -> Self {
        Self::new(Self::USER)
    }

    pub fn visitor() -> Self {
        Self::new(Self::VISITOR)
    }

    /// Whether `name` is one of the three predefined roles.
    pub fn is_predefined_name(name: &str) -> bool {
        Self::PREDEFINED.contains(&name)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        self.0 == Self::ADMIN
    }

    /// Return the role name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}
