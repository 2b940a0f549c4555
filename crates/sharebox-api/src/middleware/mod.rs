//! Request middleware.

pub mod access;
pub mod cors;
pub mod logging;
