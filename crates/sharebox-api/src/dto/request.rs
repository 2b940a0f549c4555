//! Request DTOs with validation annotations.

use serde::Deserialize;
use validator::Validate;

use sharebox_core::error::AppError;
use sharebox_entity::user::{Preferences, Quota, Role};

/// Parses a user id sent as a decimal string.
pub fn parse_user_id(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid user id '{raw}'")))
}

/// POST /v1/users/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "user name is required"))]
    pub user: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub pwd: String,
}

/// PATCH /v1/users/pwd
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    #[validate(length(min = 1))]
    pub old_pwd: String,
    #[validate(length(min = 1))]
    pub new_pwd: String,
}

/// PATCH /v1/users/pwd/force-set
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForceSetPasswordRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub new_pwd: String,
}

/// POST /v1/users/
#[derive(Debug, Deserialize, Validate)]
pub struct AddUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub pwd: String,
    pub role: Role,
}

/// DELETE /v1/users/?id=N
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteUserQuery {
    #[validate(length(min = 1))]
    pub id: String,
}

/// PATCH /v1/users/
///
/// `usedSpace` may be present in the body but is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct SetUserRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub quota: Option<Quota>,
}

/// PATCH /v1/users/preferences
#[derive(Debug, Deserialize, Validate)]
pub struct SetPreferencesRequest {
    pub preferences: Preferences,
}

/// POST and DELETE /v1/roles/
#[derive(Debug, Deserialize, Validate)]
pub struct RoleRequest {
    #[validate(length(min = 1))]
    pub role: String,
}
