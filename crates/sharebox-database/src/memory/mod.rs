//! In-memory repository implementations.

pub mod user;

pub use user::MemoryUserRepository;
