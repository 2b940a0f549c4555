//! User entity, quota, preferences and role.

pub mod model;
pub mod preferences;
pub mod quota;
pub mod role;

pub use model::{ADMIN_ID, UserInfoUpdate, User, VISITOR_ID, VISITOR_NAME};
pub use preferences::{BgConfig, Preferences};
pub use quota::Quota;
pub use role::Role;
