//! # sharebox-auth
//!
//! Session and access-control core for Sharebox.
//!
//! ## Modules
//!
//! - `token` — signed claim tokens (issue, parse) and the typed session claims
//! - `access` — exact-match rule table, longest-prefix rule tree, and the authorizer
//! - `password` — Argon2id password hashing and length policy
//! - `session` — login, logout, claim extraction, and session cookies

pub mod access;
pub mod password;
pub mod session;
pub mod token;

pub use access::{AccessPolicy, Authorizer, PrefixRuleTree, RuleTable};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::{LoginResult, SessionCookie, SessionManager};
pub use token::{ClaimMap, Claims, TokenCodec};
