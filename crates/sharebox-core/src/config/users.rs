//! User account rules and defaults.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// User naming rules, bootstrap credentials and default quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersConfig {
    /// Minimum length of user and custom role names.
    #[serde(default = "default_min_name_len")]
    pub min_user_name_len: usize,
    /// Minimum password length for new users.
    #[serde(default = "default_min_pwd_len")]
    pub min_pwd_len: usize,
    /// Name of the built-in root admin seeded at startup.
    #[serde(default = "default_admin_name")]
    pub default_admin_name: String,
    /// Password of the built-in root admin seeded at startup.
    #[serde(default = "default_admin_pwd")]
    pub default_admin_pwd: String,
    /// Default space limit in bytes.
    #[serde(default = "default_space_limit")]
    pub space_limit: i64,
    /// Default upload rate limit in bytes per second.
    #[serde(default = "default_speed_limit")]
    pub upload_speed_limit: i32,
    /// Default download rate limit in bytes per second.
    #[serde(default = "default_speed_limit")]
    pub download_speed_limit: i32,
    /// Whether users may set a custom background.
    #[serde(default)]
    pub allow_set_bg: bool,
}

impl UsersConfig {
    /// Rejects bootstrap credentials that the naming rules would refuse.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_admin_name.len() < self.min_user_name_len {
            return Err(AppError::configuration(
                "users.default_admin_name is shorter than users.min_user_name_len",
            ));
        }
        if self.default_admin_pwd.len() < self.min_pwd_len {
            return Err(AppError::configuration(
                "users.default_admin_pwd is shorter than users.min_pwd_len",
            ));
        }
        Ok(())
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            min_user_name_len: default_min_name_len(),
            min_pwd_len: default_min_pwd_len(),
            default_admin_name: default_admin_name(),
            default_admin_pwd: default_admin_pwd(),
            space_limit: default_space_limit(),
            upload_speed_limit: default_speed_limit(),
            download_speed_limit: default_speed_limit(),
            allow_set_bg: false,
        }
    }
}

fn default_min_name_len() -> usize {
    2
}

fn default_min_pwd_len() -> usize {
    4
}

fn default_admin_name() -> String {
    "admin".to_string()
}

fn default_admin_pwd() -> String {
    "change-me-now".to_string()
}

fn default_space_limit() -> i64 {
    100 * 1024 * 1024
}

fn default_speed_limit() -> i32 {
    100 * 1024
}
