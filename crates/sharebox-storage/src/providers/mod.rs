//! Filesystem provisioners.

pub mod local;

pub use local::LocalProvisioner;
