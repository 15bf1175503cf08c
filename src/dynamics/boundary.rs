use crate::core::{particle::Particle, types::WorldBounds};

/// Fully inelastic wall response: snaps an escaping edge back inside and
/// discards the velocity component normal to that wall.
///
/// Dragged particles are left where the pointer put them.
pub fn clamp_to_bounds(particle: &mut Particle, bounds: &WorldBounds) {
    if particle.is_dragging {
        return;
    }
    let radius = particle.radius();

    if particle.position.x - radius < 0.0 {
        particle.position.x = radius;
        particle.velocity.x = 0.0;
    } else if particle.position.x + radius > bounds.width {
        particle.position.x = bounds.width - radius;
        particle.velocity.x = 0.0;
    }

    if particle.position.y - radius < 0.0 {
        particle.position.y = radius;
        particle.velocity.y = 0.0;
    } else if particle.position.y + radius > bounds.height {
        particle.position.y = bounds.height - radius;
        particle.velocity.y = 0.0;
    }
}
