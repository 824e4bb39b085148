use crate::config::SimulationConfig;
use crate::core::{body::TaggedBody, snapshot::Snapshot};
use crate::utils::math::direction_and_length;

use super::contact::Contact;

/// Exhaustive disc-overlap test over every body pair.
///
/// Body counts are in the tens, so every pair is checked directly. Pairs
/// are visited in ascending `(i, j)` order; the step pipeline relies on
/// that order because each resolution changes the state later pairs see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    config: SimulationConfig,
}

impl CollisionDetector {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self { config: *config }
    }

    /// All `(i, j)` with `i < j < count`, ascending by `i` then `j`.
    pub fn pair_indices(count: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| (i, j)))
    }

    /// Tests a single pair against its current state.
    pub fn test_pair(
        &self,
        a: &TaggedBody,
        b: &TaggedBody,
        index_a: usize,
        index_b: usize,
    ) -> Option<Contact> {
        let min_distance = self.config.radius_for(a.role) + self.config.radius_for(b.role);
        let (normal, distance) = direction_and_length(b.body.position - a.body.position);

        if distance.is_nan() || distance >= min_distance {
            return None;
        }

        Some(Contact {
            index_a,
            index_b,
            normal,
            distance,
            overlap: min_distance - distance,
        })
    }

    /// Every overlapping pair of `bodies`, without resolving any of them.
    pub fn find_contacts(&self, bodies: &[TaggedBody]) -> Vec<Contact> {
        Self::pair_indices(bodies.len())
            .filter_map(|(i, j)| self.test_pair(&bodies[i], &bodies[j], i, j))
            .collect()
    }

    /// Read-only overlap query over a snapshot.
    pub fn overlapping_pairs(&self, snapshot: &Snapshot) -> Vec<(usize, usize)> {
        self.find_contacts(&snapshot.to_tagged())
            .into_iter()
            .map(|contact| (contact.index_a, contact.index_b))
            .collect()
    }
}
