//! HTTP request handlers.

pub mod admin;
pub mod auth;
pub mod health;
pub mod user;

use sharebox_core::error::AppError;

use crate::error::ApiError;

/// Fallback for allowed requests that match no route.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
