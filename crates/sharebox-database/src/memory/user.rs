//! In-memory user repository backed by dashmap.

use std::collections::BTreeSet;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use sharebox_core::error::AppError;
use sharebox_core::result::AppResult;
use sharebox_entity::user::{Preferences, Role, User, UserInfoUpdate};

use crate::repositories::UserRepository;

/// Keeps users and roles in process memory.
#[derive(Debug)]
pub struct MemoryUserRepository {
    /// Users by id.
    users: DashMap<u64, User>,
    /// Name → id index enforcing name uniqueness.
    names: DashMap<String, u64>,
    /// Registered role names, predefined ones included.
    roles: RwLock<BTreeSet<String>>,
}

impl MemoryUserRepository {
    /// Creates an empty repository with the predefined roles registered.
    pub fn new() -> Self {
        let roles = Role::PREDEFINED.iter().map(|r| r.to_string()).collect();
        Self {
            users: DashMap::new(),
            names: DashMap::new(),
            roles: RwLock::new(roles),
        }
    }

    async fn require_role(&self, role: &Role) -> AppResult<()> {
        if self.roles.read().await.contains(role.as_str()) {
            Ok(())
        } else {
            Err(AppError::validation(format!("Role '{role}' does not exist")))
        }
    }

    fn user_not_found(id: u64) -> AppError {
        AppError::not_found(format!("User {id} not found"))
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>> {
        let Some(id) = self.names.get(name).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        self.require_role(&user.role).await?;

        // Both slots are claimed before either is written; users before names.
        let Entry::Vacant(id_slot) = self.users.entry(user.id) else {
            return Err(AppError::conflict(format!("User id {} is taken", user.id)));
        };
        match self.names.entry(user.name.clone()) {
            Entry::Occupied(_) => {
                return Err(AppError::conflict(format!(
                    "User name '{}' is taken",
                    user.name
                )));
            }
            Entry::Vacant(name_slot) => {
                name_slot.insert(user.id);
            }
        }
        id_slot.insert(user.clone());

        debug!(user_id = user.id, name = %user.name, "User stored");
        Ok(())
    }

    async fn delete(&self, id: u64) -> AppResult<()> {
        let (_, user) = self
            .users
            .remove(&id)
            .ok_or_else(|| Self::user_not_found(id))?;
        self.names.remove(&user.name);

        debug!(user_id = id, "User removed");
        Ok(())
    }

    async fn set_pwd(&self, id: u64, pwd_hash: &str) -> AppResult<()> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| Self::user_not_found(id))?;
        user.pwd = pwd_hash.to_string();
        Ok(())
    }

    async fn set_info(&self, id: u64, update: &UserInfoUpdate) -> AppResult<()> {
        if let Some(role) = &update.role {
            self.require_role(role).await?;
        }

        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| Self::user_not_found(id))?;
        if let Some(role) = &update.role {
            user.role = role.clone();
        }
        if let Some(quota) = update.quota {
            user.quota = quota;
        }
        if let Some(used_space) = update.used_space {
            user.used_space = used_space;
        }
        Ok(())
    }

    async fn set_preferences(&self, id: u64, preferences: &Preferences) -> AppResult<()> {
        let mut user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| Self::user_not_found(id))?;
        user.preferences = preferences.clone();
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn add_role(&self, role: &Role) -> AppResult<()> {
        if !self.roles.write().await.insert(role.as_str().to_string()) {
            return Err(AppError::conflict(format!("Role '{role}' already exists")));
        }
        Ok(())
    }

    async fn delete_role(&self, role: &Role) -> AppResult<()> {
        if Role::is_predefined_name(role.as_str()) {
            return Err(AppError::conflict(
                "Predefined roles can not be added or deleted",
            ));
        }
        if !self.roles.write().await.remove(role.as_str()) {
            return Err(AppError::not_found(format!("Role '{role}' does not exist")));
        }
        Ok(())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let roles = self.roles.read().await;
        let predefined = Role::PREDEFINED.iter().map(|r| Role::new(*r));
        let custom = roles
            .iter()
            .filter(|r| !Role::is_predefined_name(r))
            .map(|r| Role::new(r.as_str()));
        Ok(predefined.chain(custom).collect())
    }
}
