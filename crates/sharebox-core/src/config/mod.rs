//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files plus `SHAREBOX__*` environment variables. Each
//! sub-module represents a logical configuration section.

pub mod access;
pub mod app;
pub mod auth;
pub mod cookie;
pub mod logging;
pub mod storage;
pub mod users;

use serde::{Deserialize, Serialize};

pub use self::access::AccessConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::cookie::{CookieConfig, SameSitePolicy};
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;
pub use self::users::UsersConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Session token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session cookie attributes.
    #[serde(default)]
    pub cookie: CookieConfig,
    /// User account rules and defaults.
    #[serde(default)]
    pub users: UsersConfig,
    /// Access-control policy inputs.
    #[serde(default)]
    pub access: AccessConfig,
    /// Home-folder provisioning settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files in `dir`.
    ///
    /// Merges `<dir>/default` with an environment-specific overlay
    /// `<dir>/<env>` and environment variables prefixed with `SHAREBOX__`,
    /// then validates the result.
    pub fn load(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHAREBOX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Checks cross-field rules that serde defaults cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.cors.validate()?;
        self.auth.validate()?;
        self.cookie.validate()?;
        self.users.validate()?;
        Ok(())
    }
}
