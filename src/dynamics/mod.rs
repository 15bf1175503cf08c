//! Simulation dynamics: global forces, integration and wall handling.

pub mod boundary;
pub mod forces;
pub mod integrator;

pub use boundary::clamp_to_bounds;
pub use forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce, GroundFriction};
pub use integrator::Integrator;
