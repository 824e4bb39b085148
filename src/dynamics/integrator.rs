#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::core::body::TaggedBody;

use super::forces::ForceRegistry;

/// Whether `dt` describes a real forward step.
pub fn is_physical_dt(dt: f32) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Semi-implicit Euler integrator.
///
/// Velocity is updated first (every registered force, in order), then the
/// position advances with the new velocity.
pub struct Integrator {
    forces: ForceRegistry,
    parallel: bool,
}

impl Integrator {
    pub fn new(forces: ForceRegistry) -> Self {
        Self {
            forces,
            parallel: false,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(ForceRegistry::from_config(config))
    }

    /// Enables data-parallel integration. Has no effect without the
    /// `parallel` feature.
    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn integrate(&self, body: &mut TaggedBody, dt: f32) {
        if !is_physical_dt(dt) {
            return;
        }
        self.forces.apply_all(body, dt);
        body.body.position += body.body.velocity * dt;
    }

    pub fn step(&self, bodies: &mut [TaggedBody], dt: f32) {
        if !is_physical_dt(dt) {
            return;
        }

        #[cfg(feature = "parallel")]
        if self.parallel {
            bodies
                .par_iter_mut()
                .for_each(|body| self.integrate(body, dt));
            return;
        }

        for body in bodies.iter_mut() {
            self.integrate(body, dt);
        }
    }
}
