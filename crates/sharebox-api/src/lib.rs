//! # sharebox-api
//!
//! HTTP API layer for Sharebox built on Axum.
//!
//! Every request passes the access middleware first: the session cookie is
//! turned into a role (falling back to the visitor role) and the request is
//! checked against the authorizer before any handler runs.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
