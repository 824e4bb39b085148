//! Slingshot Physics – 2D projectile and collision step engine for Rust.
//!
//! The engine advances a small scene of disc-shaped point masses: one
//! projectile that feels air drag and a handful of blocks. Each step runs
//! four phases in a fixed order:
//!
//! 1. semi-implicit Euler integration under gravity (plus drag for the
//!    projectile),
//! 2. a position-based ground clamp with role-specific friction,
//! 3. exhaustive pairwise disc-overlap detection in ascending pair order,
//! 4. inverse-mass de-penetration and per-axis elastic response scaled by
//!    a restitution factor.
//!
//! Steps are pure: they take a [`Snapshot`] by reference and return a new
//! one. The scene uses screen coordinates, origin top-left and `y` down.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{CollisionDetector, CollisionResolver, Contact, Resolution};
pub use config::{ConfigError, SimulationConfig};
pub use crate::core::{Body, BodyRole, Snapshot, TaggedBody};
pub use dynamics::{
    forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce},
    ground::GroundConstraint,
    integrator::Integrator,
};
pub use utils::{math::SceneBounds, profiling::StepStats};
pub use world::PhysicsWorld;

/// High-level convenience wrapper that owns a [`PhysicsWorld`].
pub struct PhysicsEngine {
    world: PhysicsWorld,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl PhysicsEngine {
    /// Creates an engine from `config` without validating it.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            world: PhysicsWorld::new(config),
        }
    }

    /// Creates an engine, rejecting configurations the pipeline cannot use.
    pub fn try_new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            world: PhysicsWorld::try_new(config)?,
        })
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(SimulationConfig::from_json_str(json)?))
    }

    /// Advances the scene by `dt` seconds, returning the next snapshot.
    ///
    /// A zero, negative or non-finite `dt` returns an unchanged copy.
    pub fn step(&self, snapshot: &Snapshot, dt: f32) -> Snapshot {
        self.world.step(snapshot, dt)
    }

    /// Advances the scene and reports what happened during the step.
    pub fn step_with_stats(&self, snapshot: &Snapshot, dt: f32) -> (Snapshot, StepStats) {
        let (next, stats) = self.world.step_with_stats(snapshot, dt);
        stats.report();
        (next, stats)
    }

    /// Whether the projectile is still inside the scene.
    pub fn projectile_in_bounds(&self, snapshot: &Snapshot) -> bool {
        self.world
            .config()
            .scene_bounds()
            .contains(snapshot.projectile.position)
    }

    /// Enables or disables parallel integration.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.world.set_parallel_enabled(enabled);
    }

    /// Returns whether the engine is currently using parallel execution.
    pub fn parallel_enabled(&self) -> bool {
        self.world.parallel_enabled()
    }

    pub fn config(&self) -> &SimulationConfig {
        self.world.config()
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }
}
