use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable particle identifier, handed out once in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(u64);

impl ParticleId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u64)
    }

    /// Position of the particle in creation order.
    pub(crate) fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A circular body with kinematic state and a per-tick force accumulator.
///
/// Radius and mass are fixed at creation; everything else is driven either by
/// the physics passes or, while `is_dragging` is set, by the input layer.
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    id: ParticleId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Net force gathered during the current tick, drained by integration.
    pub force: Vec2,
    pub is_dragging: bool,
    radius: f32,
    mass: f32,
    inverse_mass: f32,
}

impl Particle {
    /// Builds a particle at rest. Callers guarantee `radius > 0` and `mass > 0`.
    pub(crate) fn new(id: ParticleId, position: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            is_dragging: false,
            radius,
            mass,
            inverse_mass: 1.0 / mass,
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// True when the point lies strictly inside the disc.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) < self.radius * self.radius
    }

    pub fn snapshot(&self) -> ParticleSnapshot {
        ParticleSnapshot {
            id: self.id,
            x: self.position.x,
            y: self.position.y,
            radius: self.radius,
            is_dragging: self.is_dragging,
        }
    }
}

/// Read-only view of a particle handed to the renderer once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub id: ParticleId,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub is_dragging: bool,
}
