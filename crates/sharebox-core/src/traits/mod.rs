//! Collaborator traits defined in `sharebox-core` and implemented by other crates.

pub mod id_generator;
pub mod provisioner;

pub use id_generator::IdGenerator;
pub use provisioner::Provisioner;
