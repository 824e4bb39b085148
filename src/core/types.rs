use serde::{Deserialize, Serialize};

/// Common math types re-exported for convenience.
pub use glam::Vec2;

/// What part a body plays in the scene.
///
/// The role picks the collision radius and ground friction, and decides
/// whether air drag applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyRole {
    /// The single launched body. Feels air drag.
    Projectile,
    /// A structure piece. Gravity, ground friction and collisions only.
    Block,
}

impl BodyRole {
    pub fn feels_drag(self) -> bool {
        matches!(self, BodyRole::Projectile)
    }
}
