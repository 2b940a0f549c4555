//! Identifier generators.

pub mod timestamp;

pub use timestamp::TimestampIdGenerator;
