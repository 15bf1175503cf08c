use glam::Vec2;

use super::boundary::clamp_to_bounds;
use crate::core::{particle::Particle, types::WorldBounds};

/// Semi-implicit Euler stepping with a fixed unit timestep of one tick.
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    parallel: bool,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Consumes the accumulated force of a free particle: `v += F/m; x += v`.
    /// The force is cleared for every particle, dragged or not.
    pub fn integrate_particle(particle: &mut Particle) {
        if !particle.is_dragging {
            let acceleration = particle.force * particle.inverse_mass();
            particle.velocity += acceleration;
            particle.position += particle.velocity;
        }
        particle.force = Vec2::ZERO;
    }

    pub fn step(&self, particles: &mut [Particle], bounds: &WorldBounds) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            if self.parallel {
                particles.par_iter_mut().for_each(|particle| {
                    Self::integrate_particle(particle);
                    clamp_to_bounds(particle, bounds);
                });
                return;
            }
        }

        for particle in particles.iter_mut() {
            Self::integrate_particle(particle);
            clamp_to_bounds(particle, bounds);
        }
    }
}
