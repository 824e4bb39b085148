use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{
    body::{Body, TaggedBody},
    types::BodyRole,
};

/// Immutable view of every body in the scene at one instant.
///
/// The projectile always comes first in flattened order, followed by the
/// blocks in insertion order. Steps consume a snapshot by reference and
/// build a new one, so a renderer may keep reading the previous snapshot
/// while the next one is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub projectile: Body,
    pub blocks: Vec<Body>,
}

impl Snapshot {
    pub fn new(projectile: Body, blocks: Vec<Body>) -> Self {
        Self { projectile, blocks }
    }

    /// Total number of bodies, projectile included.
    pub fn body_count(&self) -> usize {
        self.blocks.len() + 1
    }

    /// Body at flattened `index` (0 is the projectile).
    pub fn body(&self, index: usize) -> Option<&Body> {
        match index {
            0 => Some(&self.projectile),
            _ => self.blocks.get(index - 1),
        }
    }

    /// Iterates over `(role, body)` in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyRole, &Body)> + '_ {
        std::iter::once((BodyRole::Projectile, &self.projectile))
            .chain(self.blocks.iter().map(|block| (BodyRole::Block, block)))
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.iter().map(|(_, body)| body.kinetic_energy()).sum()
    }

    /// New snapshot with the block set replaced wholesale.
    pub fn with_blocks(&self, blocks: Vec<Body>) -> Self {
        Self {
            projectile: self.projectile,
            blocks,
        }
    }

    /// New snapshot with the projectile moved back to `position` and at
    /// rest. Its mass and every block are kept.
    pub fn with_projectile_reset(&self, position: Vec2) -> Self {
        Self {
            projectile: Body::at_rest(position, self.projectile.mass),
            blocks: self.blocks.clone(),
        }
    }

    pub(crate) fn to_tagged(&self) -> Vec<TaggedBody> {
        self.iter()
            .map(|(role, body)| TaggedBody::new(role, *body))
            .collect()
    }

    /// Rebuilds a snapshot from a flattened buffer produced by
    /// [`Snapshot::to_tagged`]. Returns `None` if the buffer is empty.
    pub(crate) fn from_tagged(bodies: Vec<TaggedBody>) -> Option<Self> {
        let mut iter = bodies.into_iter();
        let projectile = iter.next()?.body;
        Some(Self {
            projectile,
            blocks: iter.map(|tagged| tagged.body).collect(),
        })
    }
}
