//! Length policy for user names, role names, and passwords.

use sharebox_core::config::UsersConfig;
use sharebox_core::error::AppError;

/// Validates names and passwords against configured minimum lengths.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_pwd_len: usize,
    /// Minimum user and role name length.
    min_name_len: usize,
}

impl PasswordValidator {
    /// Creates a new validator from user configuration.
    pub fn new(config: &UsersConfig) -> Self {
        Self {
            min_pwd_len: config.min_pwd_len,
            min_name_len: config.min_user_name_len,
        }
    }

    /// Validates a new password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_pwd_len {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_pwd_len
            )));
        }
        Ok(())
    }

    /// Validates a user or role name. Too-short names violate the data model.
    pub fn validate_name(&self, name: &str) -> Result<(), AppError> {
        if name.chars().count() < self.min_name_len {
            return Err(AppError::conflict(format!(
                "Name must be at least {} characters long",
                self.min_name_len
            )));
        }
        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}
