//! Simulation dynamics: forces, integration and the ground constraint.

pub mod forces;
pub mod ground;
pub mod integrator;

pub use forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce};
pub use ground::GroundConstraint;
pub use integrator::{is_physical_dt, Integrator};
