//! # sharebox-storage
//!
//! Reference collaborators for the session core: a provisioner that manages
//! user home folders on the local filesystem and a time-based id generator.

pub mod id;
pub mod providers;

pub use id::TimestampIdGenerator;
pub use providers::LocalProvisioner;
