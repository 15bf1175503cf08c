//! Global configuration constants and the tunable simulation settings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SandboxError};

/// Default downward acceleration per tick² (Y-down screen space).
pub const DEFAULT_GRAVITY: f32 = 0.1;

/// Default linear air resistance coefficient.
pub const DEFAULT_DRAG_COEFFICIENT: f32 = 0.05;

/// Default friction applied to horizontal motion while resting on the floor.
pub const DEFAULT_GROUND_FRICTION: f32 = 0.1;

/// Fraction of the positional error corrected per collision pass.
pub const DEFAULT_COLLISION_PUSH_FRACTION: f32 = 0.05;

/// Fraction of relative velocity exchanged between touching particles.
pub const DEFAULT_COLLISION_VELOCITY_EXCHANGE: f32 = 0.1;

/// Radius of particles spawned by a sketch gesture.
pub const DEFAULT_SPAWN_RADIUS: f32 = 5.0;

/// Mass of particles spawned by a sketch gesture.
pub const DEFAULT_SPAWN_MASS: f32 = 1.0;

/// Initial seed particle placed by `SandboxWorld::spawn_seed`.
pub const DEFAULT_SEED_POSITION: [f32; 2] = [100.0, 100.0];
pub const DEFAULT_SEED_RADIUS: f32 = 20.0;
pub const DEFAULT_SEED_MASS: f32 = 1.0;

/// Default world extents.
pub const DEFAULT_WORLD_WIDTH: f32 = 800.0;
pub const DEFAULT_WORLD_HEIGHT: f32 = 600.0;

/// Smallest mass a stored particle may carry; integration divides by it.
pub const MIN_MASS: f32 = 1e-3;

/// Smallest radius a stored particle may carry.
pub const MIN_RADIUS: f32 = 1e-3;

/// How particles held by the pointer take part in collision resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraggedCollision {
    /// The dragged particle blocks others but is never moved by contacts.
    #[default]
    Obstacle,
    /// Pairs involving a dragged particle are skipped entirely.
    Ignore,
}

/// Soft contact response parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionResponse {
    pub push_fraction: f32,
    pub velocity_exchange: f32,
}

impl Default for CollisionResponse {
    fn default() -> Self {
        Self {
            push_fraction: DEFAULT_COLLISION_PUSH_FRACTION,
            velocity_exchange: DEFAULT_COLLISION_VELOCITY_EXCHANGE,
        }
    }
}

/// Size and mass given to particles created by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub radius: f32,
    pub mass: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SPAWN_RADIUS,
            mass: DEFAULT_SPAWN_MASS,
        }
    }
}

/// Every tunable of a sandbox session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: f32,
    pub drag_coefficient: f32,
    pub ground_friction_enabled: bool,
    pub ground_friction: f32,
    pub collision: CollisionResponse,
    pub dragging_enabled: bool,
    pub dragged_collision: DraggedCollision,
    pub spawn: SpawnSettings,
    /// Upper bound on particles created through sketch gestures.
    pub max_particles: Option<usize>,
    /// Emit a warning when a step takes longer than this many milliseconds.
    pub frame_budget_ms: Option<f32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            ground_friction_enabled: true,
            ground_friction: DEFAULT_GROUND_FRICTION,
            collision: CollisionResponse::default(),
            dragging_enabled: true,
            dragged_collision: DraggedCollision::default(),
            spawn: SpawnSettings::default(),
            max_particles: None,
            frame_budget_ms: None,
        }
    }
}

impl SimulationConfig {
    /// Checks that every coefficient is finite and inside its usable range.
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(invalid("gravity", self.gravity));
        }
        non_negative("drag_coefficient", self.drag_coefficient)?;
        non_negative("ground_friction", self.ground_friction)?;
        unit_interval("collision.push_fraction", self.collision.push_fraction)?;
        unit_interval(
            "collision.velocity_exchange",
            self.collision.velocity_exchange,
        )?;
        if !(self.spawn.radius.is_finite() && self.spawn.radius > 0.0) {
            return Err(invalid("spawn.radius", self.spawn.radius));
        }
        if !(self.spawn.mass.is_finite() && self.spawn.mass > 0.0) {
            return Err(invalid("spawn.mass", self.spawn.mass));
        }
        if let Some(budget) = self.frame_budget_ms {
            non_negative("frame_budget_ms", budget)?;
        }
        Ok(())
    }
}

fn invalid(field: &str, value: f32) -> SandboxError {
    SandboxError::InvalidConfig(format!("{field} = {value}"))
}

fn non_negative(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}

fn unit_interval(field: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}
