use crate::config::SimulationConfig;
use crate::core::body::TaggedBody;

/// A velocity contribution applied to a body during integration.
///
/// Generators run in registration order and each one sees the velocity
/// left behind by the previous one.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, body: &mut TaggedBody, dt: f32);
}

/// Constant downward acceleration, independent of mass.
pub struct GravityForce {
    pub gravity: f32,
}

impl GravityForce {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}

impl ForceGenerator for GravityForce {
    fn apply(&self, body: &mut TaggedBody, dt: f32) {
        body.body.velocity.y += self.gravity * dt;
    }
}

/// Quadratic drag resisting the direction of motion. Projectile only.
pub struct DragForce {
    pub drag_coefficient: f32,
}

impl DragForce {
    pub fn new(drag_coefficient: f32) -> Self {
        Self { drag_coefficient }
    }
}

impl ForceGenerator for DragForce {
    fn apply(&self, body: &mut TaggedBody, dt: f32) {
        if !body.role.feels_drag() {
            return;
        }
        if !body.body.has_valid_mass() {
            log::trace!("skipping drag for body with mass {}", body.body.mass);
            return;
        }

        let velocity = body.body.velocity;
        let speed = velocity.length();
        let drag = -self.drag_coefficient * velocity * speed;
        let acceleration = drag / body.body.mass;
        body.body.velocity += acceleration * dt;
    }
}

/// Ordered collection of forces applied every step.
pub struct ForceRegistry {
    forces: Vec<Box<dyn ForceGenerator>>,
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    /// Gravity followed by projectile drag.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut registry = Self::new();
        registry.add_force(GravityForce::new(config.gravity));
        registry.add_force(DragForce::new(config.drag_coefficient));
        registry
    }

    pub fn add_force<F: ForceGenerator + 'static>(&mut self, force: F) {
        self.forces.push(Box::new(force));
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn apply_all(&self, body: &mut TaggedBody, dt: f32) {
        for force in &self.forces {
            force.apply(body, dt);
        }
    }
}
