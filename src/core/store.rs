use glam::Vec2;
use log::{debug, warn};

use super::particle::{Particle, ParticleId, ParticleSnapshot};
use crate::config::{MIN_MASS, MIN_RADIUS};
use crate::error::{Result, SandboxError};

/// Append-only particle storage iterated in creation order.
///
/// Ids are dense creation indices: particles are never removed, so an id maps
/// straight to its slot and iteration order equals id order.
#[derive(Debug, Default, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    /// Appends a particle at rest. Non-positive or non-finite mass and radius
    /// values are replaced with `MIN_MASS` / `MIN_RADIUS`; any finite positive
    /// value is kept as given, matching what [`ParticleStore::try_create`] accepts.
    pub fn create(&mut self, x: f32, y: f32, radius: f32, mass: f32) -> ParticleId {
        let mass = sanitize(mass, MIN_MASS, "mass");
        let radius = sanitize(radius, MIN_RADIUS, "radius");
        self.push(Vec2::new(x, y), radius, mass)
    }

    /// Like [`ParticleStore::create`] but rejects unusable mass or radius instead of clamping.
    pub fn try_create(&mut self, x: f32, y: f32, radius: f32, mass: f32) -> Result<ParticleId> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SandboxError::InvalidMass(mass));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SandboxError::InvalidRadius(radius));
        }
        Ok(self.push(Vec2::new(x, y), radius, mass))
    }

    fn push(&mut self, position: Vec2, radius: f32, mass: f32) -> ParticleId {
        let id = ParticleId::from_index(self.particles.len());
        self.particles.push(Particle::new(id, position, radius, mass));
        debug!("created particle {id} at ({}, {}) r={radius} m={mass}", position.x, position.y);
        id
    }

    /// All particles in creation order.
    pub fn all(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn all_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.index())
    }

    fn get_mut(&mut self, id: ParticleId) -> Result<&mut Particle> {
        self.particles
            .get_mut(id.index())
            .ok_or(SandboxError::UnknownParticle(id))
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// First-created particle whose disc strictly contains the point.
    pub fn find_at(&self, x: f32, y: f32) -> Option<ParticleId> {
        let point = Vec2::new(x, y);
        self.particles
            .iter()
            .find(|particle| particle.contains(point))
            .map(Particle::id)
    }

    pub fn set_dragging(&mut self, id: ParticleId, dragging: bool) -> Result<()> {
        self.get_mut(id)?.is_dragging = dragging;
        Ok(())
    }

    pub fn set_position(&mut self, id: ParticleId, x: f32, y: f32) -> Result<()> {
        self.get_mut(id)?.position = Vec2::new(x, y);
        Ok(())
    }

    pub fn clear_velocity(&mut self, id: ParticleId) -> Result<()> {
        self.get_mut(id)?.velocity = Vec2::ZERO;
        Ok(())
    }

    /// Applies `mutator` to every particle in creation order.
    pub fn for_each<F>(&mut self, mutator: F)
    where
        F: FnMut(&mut Particle),
    {
        self.particles.iter_mut().for_each(mutator);
    }

    pub fn dragging_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_dragging).count()
    }

    /// Refills `out` with one snapshot per particle, reusing its allocation.
    pub fn snapshots_into(&self, out: &mut Vec<ParticleSnapshot>) {
        out.clear();
        out.extend(self.particles.iter().map(Particle::snapshot));
    }
}

fn sanitize(value: f32, min: f32, what: &str) -> f32 {
    if value.is_finite() && value > 0.0 {
        return value;
    }
    warn!("particle {what} {value} is unusable, clamping to {min}");
    min
}
