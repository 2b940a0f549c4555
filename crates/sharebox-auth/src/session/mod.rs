//! Session lifecycle: login, logout, and claim extraction.

pub mod cookie;
pub mod manager;

pub use cookie::SessionCookie;
pub use manager::{LoginResult, SessionManager};
