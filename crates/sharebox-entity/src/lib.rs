//! # sharebox-entity
//!
//! Domain entity models for Sharebox: users, their quota and preferences,
//! and roles.

pub mod user;

pub use user::{BgConfig, Preferences, Quota, Role, User, UserInfoUpdate};
