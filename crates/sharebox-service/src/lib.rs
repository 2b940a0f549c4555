//! # sharebox-service
//!
//! User-facing and administrative use cases. Each service enforces the user
//! model's invariants before delegating to the repository and provisioner.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use user::{AdminUserService, NewUser, SelfProfile, UserService};
