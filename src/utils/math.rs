//! Additional math helpers layered on top of `glam`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Contact normal used when two centers coincide exactly.
pub const FALLBACK_NORMAL: Vec2 = Vec2::X;

/// Returns the unit direction of `delta` and its length.
///
/// A zero-length `delta` has no direction; [`FALLBACK_NORMAL`] is returned
/// in its place together with a length of `0.0`.
pub fn direction_and_length(delta: Vec2) -> (Vec2, f32) {
    let length = delta.length();
    if length > 0.0 {
        (delta / length, length)
    } else {
        (FALLBACK_NORMAL, 0.0)
    }
}

/// A mass that can safely appear in a denominator.
pub fn is_valid_mass(mass: f32) -> bool {
    mass.is_finite() && mass > 0.0
}

/// 1-D elastic collision of two bodies along a single axis.
///
/// Returns the post-collision velocities `(v1', v2')`.
pub fn elastic_1d(v1: f32, m1: f32, v2: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    (
        (v1 * (m1 - m2) + 2.0 * m2 * v2) / total,
        (v2 * (m2 - m1) + 2.0 * m1 * v1) / total,
    )
}

/// Axis-aligned playfield rectangle anchored at the origin.
///
/// The top edge is open: bodies launched above the scene come back down
/// under gravity, so only the left, right and bottom edges count as exits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
}

impl SceneBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= 0.0 && position.x <= self.width && position.y <= self.height
    }
}
