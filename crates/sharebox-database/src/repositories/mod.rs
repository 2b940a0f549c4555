//! Repository contracts.

pub mod user;

pub use user::UserRepository;
