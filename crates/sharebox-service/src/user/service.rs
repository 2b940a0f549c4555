//! User self-service operations: profile, preferences, and password changes.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use sharebox_auth::password::{PasswordHasher, PasswordValidator};
use sharebox_auth::session::manager::INVALID_CREDENTIALS;
use sharebox_core::config::UsersConfig;
use sharebox_core::error::AppError;
use sharebox_database::UserRepository;
use sharebox_entity::user::{Preferences, Quota, Role, User};

use crate::context::RequestContext;

use super::apply_bg_policy;

/// The caller's own profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfProfile {
    pub id: u64,
    pub name: String,
    pub role: Role,
    pub quota: Quota,
    pub used_space: i64,
    pub preferences: Preferences,
}

/// Handles user self-service operations.
#[derive(Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
    /// User policy settings.
    config: UsersConfig,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService")
            .field("validator", &self.validator)
            .finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        config: UsersConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            config,
        }
    }

    /// Gets the caller's profile, looked up by the name in their session.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<SelfProfile, AppError> {
        let user = self
            .user_repo
            .find_by_name(&ctx.user_name)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let mut preferences = user.preferences;
        apply_bg_policy(&self.config, &mut preferences);

        Ok(SelfProfile {
            id: ctx.user_id,
            name: ctx.user_name.clone(),
            role: ctx.role.clone(),
            quota: user.quota,
            used_space: user.used_space,
            preferences,
        })
    }

    /// Stores the caller's preferences.
    pub async fn set_preferences(
        &self,
        ctx: &RequestContext,
        mut preferences: Preferences,
    ) -> Result<(), AppError> {
        apply_bg_policy(&self.config, &mut preferences);
        self.user_repo
            .set_preferences(ctx.user_id, &preferences)
            .await?;

        info!(user_id = ctx.user_id, "Preferences updated");
        Ok(())
    }

    /// Changes the caller's password after checking the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        self.validator.validate_not_same(old_password, new_password)?;
        self.validator.validate(new_password)?;

        let user = self.find_user(ctx.user_id).await?;
        let valid = !user.pwd.is_empty() && self.hasher.verify_password(old_password, &user.pwd)?;
        if !valid {
            warn!(user_id = ctx.user_id, "Password change with wrong old password");
            return Err(AppError::forbidden(INVALID_CREDENTIALS));
        }

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.set_pwd(ctx.user_id, &new_hash).await?;

        info!(user_id = ctx.user_id, "Password changed");
        Ok(())
    }

    async fn find_user(&self, id: u64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
