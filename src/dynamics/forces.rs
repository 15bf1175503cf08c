use glam::Vec2;

use crate::config::SimulationConfig;
use crate::core::{particle::Particle, types::WorldBounds};

/// Trait describing a global force source applied to free particles.
///
/// Generators run once per tick before collision resolution. Dragged particles
/// are filtered out by the registry, so implementations never see them.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, particle: &mut Particle, bounds: &WorldBounds);
}

/// Constant downward pull, independent of mass.
pub struct GravityForce {
    pub gravity: Vec2,
}

impl GravityForce {
    pub fn new(magnitude: f32) -> Self {
        Self {
            gravity: Vec2::new(0.0, magnitude),
        }
    }
}

impl ForceGenerator for GravityForce {
    fn apply(&self, particle: &mut Particle, _bounds: &WorldBounds) {
        particle.apply_force(self.gravity);
    }
}

/// Linear air resistance opposing the current velocity.
pub struct DragForce {
    pub drag_coefficient: f32,
}

impl ForceGenerator for DragForce {
    fn apply(&self, particle: &mut Particle, _bounds: &WorldBounds) {
        let drag = -particle.velocity * self.drag_coefficient;
        particle.apply_force(drag);
    }
}

/// Floor contact: pins grounded particles to the floor and brakes horizontal motion.
pub struct GroundFriction {
    pub coefficient: f32,
}

impl ForceGenerator for GroundFriction {
    fn apply(&self, particle: &mut Particle, bounds: &WorldBounds) {
        if !bounds.touches_floor(particle.position, particle.radius()) {
            return;
        }
        particle.position.y = bounds.height - particle.radius();
        particle.velocity.y = 0.0;
        let friction = Vec2::new(-particle.velocity.x * self.coefficient, 0.0);
        particle.apply_force(friction);
    }
}

/// Ordered collection of force generators applied each tick.
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

    /// Gravity, drag and (when enabled) ground friction, in that order.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut registry = Self::new();
        registry.add_force(GravityForce::new(config.gravity));
        registry.add_force(DragForce {
            drag_coefficient: config.drag_coefficient,
        });
        if config.ground_friction_enabled {
            registry.add_force(GroundFriction {
                coefficient: config.ground_friction,
            });
        }
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

    /// Runs every generator against a single particle, skipping dragged ones.
    pub fn apply_to(&self, particle: &mut Particle, bounds: &WorldBounds) {
        if particle.is_dragging {
            return;
        }
        for force in &self.forces {
            force.apply(particle, bounds);
        }
    }

    pub fn apply_all(&self, particles: &mut [Particle], bounds: &WorldBounds) {
        for particle in particles.iter_mut() {
            self.apply_to(particle, bounds);
        }
    }

    #[cfg(feature = "parallel")]
    pub fn par_apply_all(&self, particles: &mut [Particle], bounds: &WorldBounds) {
        use rayon::prelude::*;

        particles
            .par_iter_mut()
            .for_each(|particle| self.apply_to(particle, bounds));
    }
}
