use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_WORLD_HEIGHT, DEFAULT_WORLD_WIDTH};

/// Rectangular extent of the world, origin in the top-left corner, Y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_WORLD_WIDTH,
            height: DEFAULT_WORLD_HEIGHT,
        }
    }
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when a disc of `radius` centred at `center` has its lower edge on or below the floor.
    pub fn touches_floor(&self, center: Vec2, radius: f32) -> bool {
        center.y + radius >= self.height
    }
}
