//! # sharebox-database
//!
//! The user repository contract consumed by the access-control and session
//! core, plus an in-memory implementation used by the development server and
//! the test suites.

pub mod memory;
pub mod repositories;

pub use memory::MemoryUserRepository;
pub use repositories::UserRepository;
