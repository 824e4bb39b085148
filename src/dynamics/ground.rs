#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::core::body::TaggedBody;

/// Position-based floor clamp with role-specific horizontal friction.
///
/// This does not solve simultaneously with pair separation: a resting body
/// pushed down by a later pair correction may sit below the floor until the
/// next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundConstraint {
    config: SimulationConfig,
    parallel: bool,
}

impl GroundConstraint {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            config: *config,
            parallel: false,
        }
    }

    pub fn floor_line(&self) -> f32 {
        self.config.floor_line()
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Clamps a body that sank below the floor. Returns `true` on contact.
    pub fn apply(&self, tagged: &mut TaggedBody) -> bool {
        let floor_line = self.floor_line();
        let body = &mut tagged.body;
        if body.position.y <= floor_line {
            return false;
        }

        body.position.y = floor_line;
        body.velocity.y = 0.0;
        body.velocity.x *= self.config.ground_friction_for(tagged.role);
        true
    }

    /// Applies the clamp to every body and returns the number of contacts.
    pub fn apply_all(&self, bodies: &mut [TaggedBody]) -> usize {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return bodies
                .par_iter_mut()
                .map(|body| usize::from(self.apply(body)))
                .sum();
        }

        bodies
            .iter_mut()
            .map(|body| usize::from(self.apply(body)))
            .sum()
    }
}
