//! Domain types and models

pub mod artifact;
pub mod credentials;
pub mod job;

pub use artifact::ArtifactKind;
pub use credentials::Credentials;
pub use job::{JobListEntry, JobUpdate};
