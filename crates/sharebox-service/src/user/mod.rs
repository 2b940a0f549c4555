//! User self-service and administration.

pub mod admin;
pub mod service;

pub use admin::{AdminUserService, NewUser};
pub use service::{SelfProfile, UserService};

use sharebox_core::config::UsersConfig;
use sharebox_entity::user::{BgConfig, Preferences, Quota};

/// Quota assigned to newly created users.
pub(crate) fn default_quota(config: &UsersConfig) -> Quota {
    Quota {
        space_limit: config.space_limit,
        upload_speed_limit: config.upload_speed_limit,
        download_speed_limit: config.download_speed_limit,
    }
}

/// Drops a custom background unless the server allows one.
pub(crate) fn apply_bg_policy(config: &UsersConfig, preferences: &mut Preferences) {
    if !config.allow_set_bg {
        preferences.bg = BgConfig::default();
    }
}
