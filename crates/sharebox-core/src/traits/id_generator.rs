//! Identifier generation for new user records.

/// Produces fresh numeric user identifiers.
///
/// Ids `0` and `1` belong to the built-in admin and visitor accounts and
/// must never be returned.
pub trait IdGenerator: Send + Sync + 'static {
    /// Returns a new identifier.
    fn gen_id(&self) -> u64;
}
