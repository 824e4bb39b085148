//! Collision handling: pairwise disc detection and sequential resolution.

pub mod contact;
pub mod detection;
pub mod resolution;

pub use contact::Contact;
pub use detection::CollisionDetector;
pub use resolution::{CollisionResolver, Resolution};
