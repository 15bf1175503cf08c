use super::contact::Contact;
use crate::config::{CollisionResponse, DraggedCollision};
use crate::core::particle::Particle;

/// Soft pairwise contact response over an exhaustive O(n²) pair scan.
///
/// Each overlapping pair is nudged a fraction of the way towards touching and
/// has a fraction of its relative velocity exchanged. Masses are ignored, so
/// momentum is not conserved exactly; overlaps shrink over several ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver {
    pub response: CollisionResponse,
    pub dragged: DraggedCollision,
}

impl CollisionResolver {
    pub fn new(response: CollisionResponse, dragged: DraggedCollision) -> Self {
        Self { response, dragged }
    }

    /// Visits every pair (i, j) with i < j in creation order and returns the
    /// number of overlapping pairs that were corrected.
    pub fn resolve(&self, particles: &mut [Particle]) -> usize {
        let mut contacts = 0;
        for i in 0..particles.len() {
            let (head, tail) = particles.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                if self.resolve_pair(first, second) {
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// Corrects a single pair. A dragged particle never moves here; its
    /// partner still receives its full correction under the obstacle policy.
    pub fn resolve_pair(&self, first: &mut Particle, second: &mut Particle) -> bool {
        let involves_drag = first.is_dragging || second.is_dragging;
        if involves_drag && self.dragged == DraggedCollision::Ignore {
            return false;
        }

        let Some(contact) = Contact::between(first, second) else {
            return false;
        };

        let target = first.position + contact.direction * contact.rest_distance;
        let push = (target - second.position) * self.response.push_fraction;

        let relative = second.velocity - first.velocity;
        let exchange = relative * self.response.velocity_exchange;

        if !first.is_dragging {
            first.position -= push;
            first.velocity += exchange;
        }
        if !second.is_dragging {
            second.position += push;
            second.velocity -= exchange;
        }
        true
    }
}
