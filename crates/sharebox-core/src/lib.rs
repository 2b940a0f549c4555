//! # sharebox-core
//!
//! Core crate for Sharebox. Contains configuration schemas, the collaborator
//! traits consumed by the access-control and session core, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Sharebox crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
