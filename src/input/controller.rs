use glam::Vec2;
use log::{debug, trace, warn};

use super::event::PointerEvent;
use crate::config::{SimulationConfig, SpawnSettings};
use crate::core::{particle::ParticleId, store::ParticleStore};
use crate::error::Result;

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Holding a particle; its position follows the pointer.
    Dragging(ParticleId),
    /// Tracing a shape on empty space. Only the first point seeds the spawned particle.
    Sketching { anchor: Vec2, points: usize },
}

/// Turns pointer events into particle store mutations.
#[derive(Debug, Clone)]
pub struct InputController {
    gesture: Gesture,
    dragging_enabled: bool,
    spawn: SpawnSettings,
    max_particles: Option<usize>,
    /// Anchor of a sketch that was interrupted by grabbing a particle.
    suspended_sketch: Option<Vec2>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl InputController {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            gesture: Gesture::Idle,
            dragging_enabled: config.dragging_enabled,
            spawn: config.spawn,
            max_particles: config.max_particles,
            suspended_sketch: None,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Dispatches one event; returns the id of a particle spawned by it, if any.
    pub fn apply(&mut self, store: &mut ParticleStore, event: PointerEvent) -> Option<ParticleId> {
        match event {
            PointerEvent::Down { x, y } => {
                self.pointer_down(store, x, y);
                None
            }
            PointerEvent::Move { x, y } => {
                self.pointer_move(store, x, y);
                None
            }
            PointerEvent::Up => self.pointer_up(store),
        }
    }

    pub fn pointer_down(&mut self, store: &mut ParticleStore, x: f32, y: f32) {
        let hit = if self.dragging_enabled {
            store.find_at(x, y)
        } else {
            None
        };

        match (hit, self.gesture) {
            (Some(id), previous) => {
                match previous {
                    Gesture::Dragging(held) if held != id => {
                        self.report(store.set_dragging(held, false));
                    }
                    Gesture::Sketching { anchor, .. } => {
                        trace!("sketch at ({}, {}) suspended by grab", anchor.x, anchor.y);
                        self.suspended_sketch = Some(anchor);
                    }
                    _ => {}
                }
                if self.report(store.set_dragging(id, true)) {
                    debug!("drag start {id} at ({x}, {y})");
                    self.gesture = Gesture::Dragging(id);
                }
            }
            (None, Gesture::Dragging(held)) => {
                trace!("pointer down on empty space while holding {held}, ignored");
            }
            (None, Gesture::Sketching { anchor, points }) => {
                self.gesture = Gesture::Sketching {
                    anchor,
                    points: points + 1,
                };
            }
            (None, Gesture::Idle) => {
                trace!("sketch start at ({x}, {y})");
                self.gesture = Gesture::Sketching {
                    anchor: Vec2::new(x, y),
                    points: 1,
                };
            }
        }
    }

    pub fn pointer_move(&mut self, store: &mut ParticleStore, x: f32, y: f32) {
        match self.gesture {
            Gesture::Dragging(id) => {
                let moved = store
                    .set_position(id, x, y)
                    .and_then(|_| store.clear_velocity(id));
                self.report(moved);
            }
            Gesture::Sketching { anchor, points } => {
                self.gesture = Gesture::Sketching {
                    anchor,
                    points: points + 1,
                };
            }
            Gesture::Idle => {}
        }
    }

    /// Releases every held particle and, when a sketch was in progress (even
    /// one suspended by a grab), spawns a particle at its first point.
    pub fn pointer_up(&mut self, store: &mut ParticleStore) -> Option<ParticleId> {
        store.for_each(|particle| particle.is_dragging = false);

        let suspended = self.suspended_sketch.take();
        let gesture = std::mem::take(&mut self.gesture);
        match gesture {
            Gesture::Dragging(id) => {
                debug!("drag end {id}");
                suspended.and_then(|anchor| self.spawn(store, anchor))
            }
            Gesture::Sketching { anchor, points } if points > 0 => self.spawn(store, anchor),
            _ => suspended.and_then(|anchor| self.spawn(store, anchor)),
        }
    }

    fn spawn(&self, store: &mut ParticleStore, at: Vec2) -> Option<ParticleId> {
        if let Some(limit) = self.max_particles {
            if store.len() >= limit {
                debug!("particle limit {limit} reached, sketch at ({}, {}) dropped", at.x, at.y);
                return None;
            }
        }
        let id = store.create(at.x, at.y, self.spawn.radius, self.spawn.mass);
        debug!("sketch spawned {id}");
        Some(id)
    }

    /// Logs a failed store mutation and drops the gesture it belonged to.
    fn report(&mut self, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!("input mutation failed: {err}");
                self.gesture = Gesture::Idle;
                false
            }
        }
    }
}
