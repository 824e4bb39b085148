use std::time::Instant;

use crate::{
    collision::{
        detection::CollisionDetector,
        resolution::{CollisionResolver, Resolution},
    },
    config::{ConfigError, SimulationConfig},
    core::snapshot::Snapshot,
    dynamics::{
        ground::GroundConstraint,
        integrator::{is_physical_dt, Integrator},
    },
    utils::{
        logging::{warn_if_frame_budget_exceeded, ScopedTimer},
        profiling::StepStats,
    },
};

/// The per-step pipeline: integrate, clamp to the ground, then detect and
/// resolve pair overlaps in ascending pair order.
///
/// A world holds configuration only. Every call to [`PhysicsWorld::step`]
/// reads its input snapshot and returns a new one, so the same world can
/// be stepped from several threads at once.
pub struct PhysicsWorld {
    config: SimulationConfig,
    integrator: Integrator,
    ground: GroundConstraint,
    detector: CollisionDetector,
    resolver: CollisionResolver,
    parallel_enabled: bool,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl PhysicsWorld {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            integrator: Integrator::from_config(&config),
            ground: GroundConstraint::from_config(&config),
            detector: CollisionDetector::from_config(&config),
            resolver: CollisionResolver::from_config(&config),
            config,
            parallel_enabled: false,
        }
    }

    /// Builds a world after checking `config` with
    /// [`SimulationConfig::validate`].
    pub fn try_new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn detector(&self) -> &CollisionDetector {
        &self.detector
    }

    /// Enables data-parallel integration and ground clamping. Pair
    /// resolution always stays sequential.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled;
        self.integrator.set_parallel(enabled);
        self.ground.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    /// Advances every body by `dt` seconds.
    pub fn step(&self, snapshot: &Snapshot, dt: f32) -> Snapshot {
        self.step_with_stats(snapshot, dt).0
    }

    /// Like [`PhysicsWorld::step`], also returning counters for the step.
    pub fn step_with_stats(&self, snapshot: &Snapshot, dt: f32) -> (Snapshot, StepStats) {
        let mut stats = StepStats {
            body_count: snapshot.body_count(),
            ..StepStats::default()
        };

        if !is_physical_dt(dt) {
            log::debug!("non-physical dt {dt}; returning snapshot unchanged");
            stats.skipped = true;
            return (snapshot.clone(), stats);
        }

        let started = Instant::now();
        let mut bodies = snapshot.to_tagged();

        {
            let timer = ScopedTimer::new("step::integrate");
            self.integrator.step(&mut bodies, dt);
            stats.ground_contacts = self.ground.apply_all(&mut bodies);
            stats.integrate_time = timer.elapsed();
        }

        {
            let timer = ScopedTimer::new("step::collide");
            for (i, j) in CollisionDetector::pair_indices(bodies.len()) {
                stats.pair_tests += 1;
                let Some(contact) = self.detector.test_pair(&bodies[i], &bodies[j], i, j) else {
                    continue;
                };
                match self.resolver.resolve(&mut bodies, &contact) {
                    Resolution::Resolved | Resolution::AgainstImmovable => {
                        stats.contacts_resolved += 1;
                    }
                    Resolution::Skipped => stats.pairs_skipped += 1,
                }
            }
            stats.collide_time = timer.elapsed();
        }

        stats.total_time = started.elapsed();
        warn_if_frame_budget_exceeded(stats.total_time, self.config.frame_budget_ms);

        let next = Snapshot::from_tagged(bodies).unwrap_or_else(|| snapshot.clone());
        (next, stats)
    }
}
