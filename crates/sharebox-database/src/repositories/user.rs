//! User repository contract.

use async_trait::async_trait;

use sharebox_core::result::AppResult;
use sharebox_entity::user::{Preferences, Role, User, UserInfoUpdate};

/// Persistence of user records and custom roles.
///
/// Each call is expected to be atomic on its own; callers never rely on
/// cross-call transactions.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: u64) -> AppResult<Option<User>>;

    /// Find a user by exact login name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with a conflict on a duplicate id or name,
    /// and with a validation error if the role is not registered.
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Delete a user. Fails with not-found if the id is unknown.
    async fn delete(&self, id: u64) -> AppResult<()>;

    /// Replace a user's password hash.
    async fn set_pwd(&self, id: u64, pwd_hash: &str) -> AppResult<()>;

    /// Apply a partial update of role, quota and used space.
    async fn set_info(&self, id: u64, update: &UserInfoUpdate) -> AppResult<()>;

    /// Replace a user's preferences.
    async fn set_preferences(&self, id: u64, preferences: &Preferences) -> AppResult<()>;

    /// List all users ordered by id.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Register a custom role. Fails with a conflict if it already exists.
    async fn add_role(&self, role: &Role) -> AppResult<()>;

    /// Remove a custom role. Fails with not-found if it is not registered.
    async fn delete_role(&self, role: &Role) -> AppResult<()>;

    /// List registered roles, predefined roles first.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;
}
