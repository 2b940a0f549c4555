//! Admin user management: accounts, roles, and password resets.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use sharebox_auth::password::{PasswordHasher, PasswordValidator};
use sharebox_core::config::UsersConfig;
use sharebox_core::error::AppError;
use sharebox_core::traits::{IdGenerator, Provisioner};
use sharebox_database::UserRepository;
use sharebox_entity::user::{
    ADMIN_ID, Preferences, Quota, Role, User, UserInfoUpdate, VISITOR_ID, VISITOR_NAME,
};

use crate::context::RequestContext;

use super::default_quota;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Login name (unique).
    pub name: String,
    /// Initial password.
    pub pwd: String,
    /// Role assignment.
    pub role: Role,
}

/// Handles administrative user and role management.
#[derive(Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<dyn UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Name and password policy.
    validator: Arc<PasswordValidator>,
    /// Home folder provisioning.
    provisioner: Arc<dyn Provisioner>,
    /// Id source for new users.
    ids: Arc<dyn IdGenerator>,
    /// User policy settings.
    config: UsersConfig,
}

impl std::fmt::Debug for AdminUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminUserService")
            .field("validator", &self.validator)
            .finish()
    }
}

/// Folder holding a user's files.
fn files_folder(id: u64) -> String {
    format!("{id}/files")
}

/// Folder holding a user's in-progress uploads.
fn uploads_folder(id: u64) -> String {
    format!("{id}/uploadings")
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        provisioner: Arc<dyn Provisioner>,
        ids: Arc<dyn IdGenerator>,
        config: UsersConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            provisioner,
            ids,
            config,
        }
    }

    /// Seeds the root admin and the visitor account when they are missing.
    pub async fn ensure_builtin_users(&self) -> Result<(), AppError> {
        if self.user_repo.find_by_id(ADMIN_ID).await?.is_none() {
            self.validator.validate_name(&self.config.default_admin_name)?;
            self.validator.validate(&self.config.default_admin_pwd)?;

            let admin = User {
                id: ADMIN_ID,
                name: self.config.default_admin_name.clone(),
                pwd: self.hasher.hash_password(&self.config.default_admin_pwd)?,
                role: Role::admin(),
                used_space: 0,
                quota: default_quota(&self.config),
                preferences: Preferences::default(),
            };
            self.provision_home(ADMIN_ID).await?;
            self.user_repo.create(&admin).await?;
            warn!(
                name = %admin.name,
                "Created root admin with the configured default password; change it"
            );
        }

        if self.user_repo.find_by_id(VISITOR_ID).await?.is_none() {
            let visitor = User {
                id: VISITOR_ID,
                name: VISITOR_NAME.to_string(),
                pwd: String::new(),
                role: Role::visitor(),
                used_space: 0,
                quota: Quota::default(),
                preferences: Preferences::default(),
            };
            self.user_repo.create(&visitor).await?;
            info!("Created visitor account");
        }

        Ok(())
    }

    /// Overwrites another user's password. Admin passwords can not be reset.
    pub async fn force_set_password(&self, target_id: u64, new_password: &str) -> Result<(), AppError> {
        let target = self
            .user_repo
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {target_id} not found")))?;
        if target.is_admin() {
            warn!(user_id = target_id, "Refused to reset an admin password");
            return Err(AppError::forbidden("can not set admin's password"));
        }

        self.validator.validate(new_password)?;
        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.set_pwd(target_id, &new_hash).await?;

        info!(user_id = target_id, "Password reset by admin");
        Ok(())
    }

    /// Creates a user, provisions their home folders, and returns the new id.
    ///
    /// Folders created before a failed insert are not removed.
    pub async fn add_user(&self, req: NewUser) -> Result<u64, AppError> {
        self.validator.validate_name(&req.name)?;
        self.validator.validate(&req.pwd)?;
        if self.user_repo.find_by_name(&req.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "User name '{}' is taken",
                req.name
            )));
        }
        if !self.user_repo.list_roles().await?.contains(&req.role) {
            return Err(AppError::validation(format!(
                "Role '{}' does not exist",
                req.role
            )));
        }

        let id = self.ids.gen_id();
        let pwd = self.hasher.hash_password(&req.pwd)?;

        self.provision_home(id).await?;
        self.user_repo
            .create(&User {
                id,
                name: req.name,
                pwd,
                role: req.role,
                used_space: 0,
                quota: default_quota(&self.config),
                preferences: Preferences::default(),
            })
            .await?;

        info!(user_id = id, "User created");
        Ok(id)
    }

    /// Deletes a user and their home folder.
    ///
    /// Built-in accounts and the caller's own account are refused before
    /// anything is touched.
    pub async fn delete_user(&self, ctx: &RequestContext, id: u64) -> Result<(), AppError> {
        if User::is_reserved_id(id) {
            return Err(AppError::forbidden(
                "It is not allowed to delete predefined users",
            ));
        }
        if ctx.user_id == id {
            return Err(AppError::forbidden("can not delete self"));
        }

        self.user_repo.delete(id).await?;
        if let Err(e) = self.provisioner.remove(&id.to_string()).await {
            error!(user_id = id, error = %e, "User deleted but home folder removal failed");
            return Err(e);
        }

        info!(user_id = id, by = ctx.user_id, "User deleted");
        Ok(())
    }

    /// Changes a user's role and quota.
    pub async fn set_user(
        &self,
        id: u64,
        role: Option<Role>,
        quota: Option<Quota>,
    ) -> Result<(), AppError> {
        if id == ADMIN_ID && role.as_ref().is_some_and(|r| !r.is_admin()) {
            return Err(AppError::forbidden("The root admin must keep the admin role"));
        }

        let update = UserInfoUpdate {
            role,
            quota,
            used_space: None,
        };
        if update.is_empty() {
            return Ok(());
        }
        self.user_repo.set_info(id, &update).await?;

        info!(user_id = id, "User info updated");
        Ok(())
    }

    /// Lists every user, ordered by id.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.list().await
    }

    /// Registers a custom role.
    pub async fn add_role(&self, role: &Role) -> Result<(), AppError> {
        self.check_custom_role(role)?;
        self.user_repo.add_role(role).await?;
        info!(role = %role, "Role added");
        Ok(())
    }

    /// Removes a custom role.
    pub async fn delete_role(&self, role: &Role) -> Result<(), AppError> {
        self.check_custom_role(role)?;
        self.user_repo.delete_role(role).await?;
        info!(role = %role, "Role deleted");
        Ok(())
    }

    /// Lists every registered role, predefined ones first.
    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        self.user_repo.list_roles().await
    }

    fn check_custom_role(&self, role: &Role) -> Result<(), AppError> {
        if Role::is_predefined_name(role.as_str()) {
            return Err(AppError::conflict(
                "predefined roles can not be added/deleted",
            ));
        }
        self.validator.validate_name(role.as_str())
    }

    async fn provision_home(&self, id: u64) -> Result<(), AppError> {
        for folder in [files_folder(id), uploads_folder(id)] {
            if let Err(e) = self.provisioner.mkdir_all(&folder).await {
                error!(user_id = id, folder = %folder, error = %e, "Failed to provision home folder");
                return Err(e);
            }
        }
        Ok(())
    }
}
