//! Sample profile records used as fixture data by test harnesses.
//!
//! Each record is a leaf value: constructed once, never mutated, and free of
//! references to any other record. There is no persistence, validation, or
//! serialization format in this crate.

pub mod fixture;
pub mod group;
pub mod person;
pub mod workspace;

pub use fixture::FixtureSet;
pub use group::GroupProfile;
pub use person::PersonProfile;
pub use workspace::WorkspaceProfile;
