//! Pairwise collision response.
//!
//! Each overlapping pair is handled in one pass:
//!
//! 1. the discs are pushed apart along the contact normal, split by inverse
//!    mass so the heavier body moves less;
//! 2. each velocity axis goes through the 1-D elastic collision formula
//!    independently, using the velocities from before the response;
//! 3. both results are scaled by the restitution factor.
//!
//! The per-axis formula is not a normal/tangent decomposition. Glancing
//! contacts therefore exchange tangential velocity too, and trajectories
//! depend on that.

use glam::Vec2;
use log::{debug, warn};

use crate::config::SimulationConfig;
use crate::core::body::{Body, TaggedBody};
use crate::utils::math::elastic_1d;

use super::contact::Contact;

/// How a contact was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Both bodies had usable masses.
    Resolved,
    /// One body had an invalid mass and was treated as immovable.
    AgainstImmovable,
    /// Neither body had a usable mass, or the indices were not a valid pair.
    Skipped,
}

/// Applies de-penetration and elastic response to overlapping pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolver {
    pub restitution: f32,
}

impl CollisionResolver {
    pub fn new(restitution: f32) -> Self {
        Self { restitution }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.restitution)
    }

    /// Resolves `contact` in place on the step's working buffer.
    pub fn resolve(&self, bodies: &mut [TaggedBody], contact: &Contact) -> Resolution {
        let (i, j) = (contact.index_a, contact.index_b);
        if i >= j || j >= bodies.len() {
            warn!("ignoring contact with invalid indices ({i}, {j})");
            return Resolution::Skipped;
        }

        if contact.is_degenerate() {
            debug!(
                "bodies {i} and {j} share a center; separating along {:?}",
                contact.normal
            );
        }

        let (head, tail) = bodies.split_at_mut(j);
        let a = &mut head[i].body;
        let b = &mut tail[0].body;

        match (a.has_valid_mass(), b.has_valid_mass()) {
            (true, true) => {
                self.resolve_pair(a, b, contact);
                Resolution::Resolved
            }
            (true, false) => {
                warn!("body {j} has invalid mass {}; treating it as immovable", b.mass);
                self.resolve_against_immovable(a, -contact.normal, contact.overlap);
                Resolution::AgainstImmovable
            }
            (false, true) => {
                warn!("body {i} has invalid mass {}; treating it as immovable", a.mass);
                self.resolve_against_immovable(b, contact.normal, contact.overlap);
                Resolution::AgainstImmovable
            }
            (false, false) => {
                warn!("skipping contact ({i}, {j}): neither body has a valid mass");
                Resolution::Skipped
            }
        }
    }

    fn resolve_pair(&self, a: &mut Body, b: &mut Body, contact: &Contact) {
        let (m1, m2) = (a.mass, b.mass);
        let total = m1 + m2;

        let move_a = -contact.overlap * (m2 / total);
        let move_b = contact.overlap * (m1 / total);
        a.position += contact.normal * move_a;
        b.position += contact.normal * move_b;

        let (v1, v2) = (a.velocity, b.velocity);
        let (x1, x2) = elastic_1d(v1.x, m1, v2.x, m2);
        let (y1, y2) = elastic_1d(v1.y, m1, v2.y, m2);

        a.velocity = Vec2::new(x1, y1) * self.restitution;
        b.velocity = Vec2::new(x2, y2) * self.restitution;
    }

    /// `push` points from the immovable body toward `body`.
    ///
    /// The immovable body acts as a stationary wall: whatever velocity it
    /// carries is ignored, so the partner can only lose energy.
    fn resolve_against_immovable(&self, body: &mut Body, push: Vec2, overlap: f32) {
        body.position += push * overlap;
        body.velocity = -body.velocity * self.restitution;
    }
}
