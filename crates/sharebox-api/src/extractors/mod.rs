//! Custom Axum extractors.

pub mod auth;
pub mod validated;

pub use auth::AuthUser;
pub use validated::{ValidatedJson, ValidatedQuery};
