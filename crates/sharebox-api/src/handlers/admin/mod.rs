//! Admin-only handlers. Route access is enforced by the access middleware.

pub mod roles;
pub mod users;
