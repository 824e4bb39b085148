use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::types::BodyRole;
use crate::utils::math::is_valid_mass;

/// Point-mass body: kinematic state plus mass.
///
/// Roles are not stored on the body; they come from the slot the body
/// occupies in a [`Snapshot`](super::snapshot::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: 1.0,
        }
    }
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    /// A motionless body at `position`.
    pub fn at_rest(position: Vec2, mass: f32) -> Self {
        Self::new(position, Vec2::ZERO, mass)
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Whether the mass may be used as a divisor.
    pub fn has_valid_mass(&self) -> bool {
        is_valid_mass(self.mass)
    }

    /// `1 / mass`, or `0.0` for a body treated as immovable.
    pub fn inverse_mass(&self) -> f32 {
        if self.has_valid_mass() {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

/// A body paired with its role, as processed inside a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedBody {
    pub role: BodyRole,
    pub body: Body,
}

impl TaggedBody {
    pub fn new(role: BodyRole, body: Body) -> Self {
        Self { role, body }
    }

    pub fn projectile(body: Body) -> Self {
        Self::new(BodyRole::Projectile, body)
    }

    pub fn block(body: Body) -> Self {
        Self::new(BodyRole::Block, body)
    }
}
