//! Core types describing bodies, their roles, and scene snapshots.

pub mod types;
pub mod body;
pub mod snapshot;

pub use types::BodyRole;
pub use body::{Body, TaggedBody};
pub use snapshot::Snapshot;
