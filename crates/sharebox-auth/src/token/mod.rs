//! Signed session tokens and their claims.

pub mod claims;
pub mod codec;

pub use claims::{CLAIM_EXPIRE, CLAIM_KEYS, CLAIM_ROLE, CLAIM_UID, CLAIM_USER, ClaimMap, Claims};
pub use codec::TokenCodec;
