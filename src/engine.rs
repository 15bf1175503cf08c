//! Per-tick physics passes over a [`ParticleStore`].

use crate::collision::resolver::CollisionResolver;
use crate::config::SimulationConfig;
use crate::core::{particle::Particle, store::ParticleStore, types::WorldBounds};
use crate::dynamics::{boundary, forces::ForceRegistry, integrator::Integrator};

/// Stepping logic for a sandbox session.
///
/// Holds configuration only; all particle state lives in the store it is
/// handed. Passes must run in the order forces, collisions, integration.
pub struct PhysicsEngine {
    forces: ForceRegistry,
    resolver: CollisionResolver,
    integrator: Integrator,
    parallel_enabled: bool,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl PhysicsEngine {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            forces: ForceRegistry::from_config(config),
            resolver: CollisionResolver::new(config.collision, config.dragged_collision),
            integrator: Integrator::new(),
            parallel_enabled: false,
        }
    }

    /// Replaces the force set, e.g. to add a custom [`ForceGenerator`](crate::dynamics::ForceGenerator).
    pub fn set_force_registry(&mut self, forces: ForceRegistry) {
        self.forces = forces;
    }

    pub fn force_registry_mut(&mut self) -> &mut ForceRegistry {
        &mut self.forces
    }

    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }

    /// Enables or disables rayon for the per-particle passes. Without the
    /// `parallel` feature the flag is recorded but the passes stay sequential.
    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        self.parallel_enabled = enabled;
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.parallel_enabled
    }

    /// Accumulates gravity, drag and ground friction on every free particle.
    pub fn apply_global_forces(&self, store: &mut ParticleStore, bounds: &WorldBounds) {
        #[cfg(feature = "parallel")]
        {
            if self.parallel_enabled {
                self.forces.par_apply_all(store.all_mut(), bounds);
                return;
            }
        }
        self.forces.apply_all(store.all_mut(), bounds);
    }

    /// Soft-corrects every overlapping pair using pre-integration positions.
    /// Returns the number of pairs that were in contact.
    pub fn resolve_collisions(&self, store: &mut ParticleStore) -> usize {
        self.resolver.resolve(store.all_mut())
    }

    /// Advances free particles by one tick, clamps them to the walls and
    /// clears every force accumulator.
    pub fn integrate(&self, store: &mut ParticleStore, bounds: &WorldBounds) {
        self.integrator.step(store.all_mut(), bounds);
    }

    /// Stand-alone wall pass; `integrate` already performs it.
    pub fn clamp_to_bounds(&self, store: &mut ParticleStore, bounds: &WorldBounds) {
        store.for_each(|particle: &mut Particle| boundary::clamp_to_bounds(particle, bounds));
    }

    /// Runs the three passes in order and returns the contact count.
    pub fn step(&self, store: &mut ParticleStore, bounds: &WorldBounds) -> usize {
        self.apply_global_forces(store, bounds);
        let contacts = self.resolve_collisions(store);
        self.integrate(store, bounds);
        contacts
    }
}
