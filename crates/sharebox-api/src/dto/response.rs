//! Response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sharebox_entity::user::{Preferences, Quota, Role, User};
use sharebox_service::SelfProfile;

/// Login response carrying the issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Id of a created or deleted user, as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

impl IdResponse {
    pub fn new(id: u64) -> Self {
        Self { id: id.to_string() }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn ok() -> Self {
        Self {
            message: "ok".to_string(),
        }
    }
}

/// GET /v1/users/list
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// GET /v1/roles/list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesResponse {
    pub roles: BTreeMap<String, bool>,
}

impl RolesResponse {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles: roles
                .into_iter()
                .map(|role| (role.as_str().to_string(), true))
                .collect(),
        }
    }
}

/// GET /v1/users/self
///
/// Ids and used space are sent as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfResponse {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub quota: Quota,
    pub used_space: String,
    pub preferences: Preferences,
}

impl From<SelfProfile> for SelfResponse {
    fn from(profile: SelfProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name,
            role: profile.role,
            quota: profile.quota,
            used_space: profile.used_space.to_string(),
            preferences: profile.preferences,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
