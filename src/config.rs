//! Global configuration constants and the runtime [`SimulationConfig`].
//!
//! The constants describe the default scene: a 1200×600 playfield with
//! the origin at the top-left corner, `y` growing downward, and a 50 unit
//! thick ground strip along the bottom edge.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::BodyRole;
use crate::utils::math::SceneBounds;

/// Default downward gravitational acceleration (units/s², +Y is down).
pub const DEFAULT_GRAVITY: f32 = 400.0;

/// Quadratic air drag coefficient applied to the projectile.
pub const DEFAULT_DRAG_COEFFICIENT: f32 = 0.001;

/// Width of the playfield.
pub const DEFAULT_SCENE_WIDTH: f32 = 1200.0;

/// Height of the playfield.
pub const DEFAULT_SCENE_HEIGHT: f32 = 600.0;

/// Thickness of the ground strip at the bottom of the scene.
pub const DEFAULT_GROUND_THICKNESS: f32 = 50.0;

/// Collision radius of the projectile disc.
pub const DEFAULT_PROJECTILE_RADIUS: f32 = 15.0;

/// Collision radius of a block disc.
pub const DEFAULT_BLOCK_RADIUS: f32 = 20.0;

/// Velocity scale applied to both bodies after every pair collision.
pub const DEFAULT_RESTITUTION: f32 = 0.8;

/// Horizontal velocity retained by the projectile on ground contact.
pub const DEFAULT_PROJECTILE_GROUND_FRICTION: f32 = 0.5;

/// Horizontal velocity retained by a block on ground contact.
pub const DEFAULT_BLOCK_GROUND_FRICTION: f32 = 0.8;

/// Wall-clock budget for a single step before a warning is logged (ms).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.0;

/// Errors raised while loading or validating a [`SimulationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },
    #[error("restitution must lie in [0, 1), got {0}")]
    RestitutionOutOfRange(f32),
    #[error("`{field}` must lie in [0, 1], got {value}")]
    FrictionOutOfRange { field: &'static str, value: f32 },
    #[error("projectile radius {projectile} must be smaller than block radius {block}")]
    RadiusOrdering { projectile: f32, block: f32 },
    #[error("floor line {floor} lies outside the scene height {height}")]
    FloorOutsideScene { floor: f32, height: f32 },
}

/// Tunable constants for one simulation.
///
/// Every field defaults to the matching `DEFAULT_*` constant, so a partial
/// JSON document only needs to name the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: f32,
    pub drag_coefficient: f32,
    pub scene_width: f32,
    pub scene_height: f32,
    pub ground_thickness: f32,
    pub projectile_radius: f32,
    pub block_radius: f32,
    pub restitution: f32,
    pub projectile_ground_friction: f32,
    pub block_ground_friction: f32,
    pub frame_budget_ms: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            scene_width: DEFAULT_SCENE_WIDTH,
            scene_height: DEFAULT_SCENE_HEIGHT,
            ground_thickness: DEFAULT_GROUND_THICKNESS,
            projectile_radius: DEFAULT_PROJECTILE_RADIUS,
            block_radius: DEFAULT_BLOCK_RADIUS,
            restitution: DEFAULT_RESTITUTION,
            projectile_ground_friction: DEFAULT_PROJECTILE_GROUND_FRICTION,
            block_ground_friction: DEFAULT_BLOCK_GROUND_FRICTION,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

impl SimulationConfig {
    /// Parses a JSON document and validates the result.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: f32) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_radii(mut self, projectile: f32, block: f32) -> Self {
        self.projectile_radius = projectile;
        self.block_radius = block;
        self
    }

    /// Y coordinate of the top of the ground strip.
    pub fn floor_line(&self) -> f32 {
        self.scene_height - self.ground_thickness
    }

    pub fn radius_for(&self, role: BodyRole) -> f32 {
        match role {
            BodyRole::Projectile => self.projectile_radius,
            BodyRole::Block => self.block_radius,
        }
    }

    /// Fraction of horizontal velocity kept when a body lands on the ground.
    pub fn ground_friction_for(&self, role: BodyRole) -> f32 {
        match role {
            BodyRole::Projectile => self.projectile_ground_friction,
            BodyRole::Block => self.block_ground_friction,
        }
    }

    pub fn scene_bounds(&self) -> SceneBounds {
        SceneBounds::new(self.scene_width, self.scene_height)
    }

    /// Checks that every constant is usable by the step pipeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gravity", self.gravity),
            ("drag_coefficient", self.drag_coefficient),
            ("scene_width", self.scene_width),
            ("scene_height", self.scene_height),
            ("ground_thickness", self.ground_thickness),
            ("projectile_radius", self.projectile_radius),
            ("block_radius", self.block_radius),
            ("restitution", self.restitution),
            ("projectile_ground_friction", self.projectile_ground_friction),
            ("block_ground_friction", self.block_ground_friction),
            ("frame_budget_ms", self.frame_budget_ms),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("scene_width", self.scene_width),
            ("scene_height", self.scene_height),
            ("projectile_radius", self.projectile_radius),
            ("block_radius", self.block_radius),
            ("frame_budget_ms", self.frame_budget_ms),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.drag_coefficient < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "drag_coefficient",
                value: self.drag_coefficient,
            });
        }

        if !(0.0..1.0).contains(&self.restitution) {
            return Err(ConfigError::RestitutionOutOfRange(self.restitution));
        }

        for (field, value) in [
            ("projectile_ground_friction", self.projectile_ground_friction),
            ("block_ground_friction", self.block_ground_friction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::FrictionOutOfRange { field, value });
            }
        }

        if self.projectile_radius >= self.block_radius {
            return Err(ConfigError::RadiusOrdering {
                projectile: self.projectile_radius,
                block: self.block_radius,
            });
        }

        let floor = self.floor_line();
        if self.ground_thickness < 0.0 || floor <= 0.0 {
            return Err(ConfigError::FloorOutsideScene {
                floor,
                height: self.scene_height,
            });
        }

        Ok(())
    }
}
