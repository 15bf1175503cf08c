use glam::Vec2;

use crate::core::particle::Particle;

/// Overlap between two discs, measured from the first towards the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub distance: f32,
    /// Centre distance at which the discs just touch.
    pub rest_distance: f32,
    /// Unit vector from the first centre towards the second.
    pub direction: Vec2,
}

impl Contact {
    /// Returns a contact when the discs overlap, `None` when they merely touch or are apart.
    ///
    /// Coincident centres resolve along +X since `atan2(0, 0) == 0`.
    pub fn between(a: &Particle, b: &Particle) -> Option<Self> {
        let delta = b.position - a.position;
        let distance = delta.length();
        let rest_distance = a.radius() + b.radius();
        if distance >= rest_distance {
            return None;
        }
        let angle = delta.y.atan2(delta.x);
        Some(Self {
            distance,
            rest_distance,
            direction: Vec2::from_angle(angle),
        })
    }

    pub fn penetration(&self) -> f32 {
        self.rest_distance - self.distance
    }
}
