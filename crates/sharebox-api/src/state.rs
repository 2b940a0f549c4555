//! Shared application state passed to every handler.

use std::sync::Arc;

use sharebox_auth::access::{AccessPolicy, Authorizer};
use sharebox_auth::password::{PasswordHasher, PasswordValidator};
use sharebox_auth::session::SessionManager;
use sharebox_auth::token::TokenCodec;
use sharebox_core::config::AppConfig;
use sharebox_core::traits::{IdGenerator, Provisioner};
use sharebox_database::UserRepository;
use sharebox_service::{AdminUserService, UserService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Route access decisions.
    pub authorizer: Arc<Authorizer>,
    /// Login, logout, and token validation.
    pub session_manager: Arc<SessionManager>,
    /// Self-service user operations.
    pub user_service: Arc<UserService>,
    /// Admin user and role management.
    pub admin_user_service: Arc<AdminUserService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("authorizer", &self.authorizer)
            .field("session_manager", &self.session_manager)
            .finish()
    }
}

impl AppState {
    /// Wires the services around the given collaborators.
    pub fn build(
        config: AppConfig,
        user_repo: Arc<dyn UserRepository>,
        provisioner: Arc<dyn Provisioner>,
        ids: Arc<dyn IdGenerator>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        let policy = AccessPolicy::defaults(&config.access.public_path);
        let authorizer = Arc::new(Authorizer::from_policy(&policy));

        let codec = Arc::new(TokenCodec::new(&config.auth));
        let validator = Arc::new(PasswordValidator::new(&config.users));

        let session_manager = Arc::new(SessionManager::new(
            codec,
            Arc::clone(&user_repo),
            Arc::clone(&hasher),
            config.auth.clone(),
            config.cookie.clone(),
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&hasher),
            Arc::clone(&validator),
            config.users.clone(),
        ));
        let admin_user_service = Arc::new(AdminUserService::new(
            user_repo,
            hasher,
            validator,
            provisioner,
            ids,
            config.users.clone(),
        ));

        Self {
            config: Arc::new(config),
            authorizer,
            session_manager,
            user_service,
            admin_user_service,
        }
    }
}
