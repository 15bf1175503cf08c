//! Particle Sandbox – the physics core of an interactive 2D particle toy.
//!
//! Circular particles fall under gravity, feel linear drag and floor
//! friction, push each other apart with a soft pairwise response and can be
//! grabbed, dragged and sketched into existence through abstract pointer
//! events. Rendering and raw input capture are left to the host: it feeds
//! [`PointerEvent`]s in, calls [`SandboxWorld::step`] once per frame and draws
//! the returned [`ParticleSnapshot`]s.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod engine;
pub mod error;
pub mod input;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use collision::{contact::Contact, resolver::CollisionResolver};
pub use config::{CollisionResponse, DraggedCollision, SimulationConfig, SpawnSettings};
pub use crate::core::{
    particle::{Particle, ParticleId, ParticleSnapshot},
    store::ParticleStore,
    types::WorldBounds,
};
pub use dynamics::{
    forces::{DragForce, ForceGenerator, ForceRegistry, GravityForce, GroundFriction},
    integrator::Integrator,
};
pub use engine::PhysicsEngine;
pub use error::{Result, SandboxError};
pub use input::{
    controller::{Gesture, InputController},
    event::PointerEvent,
    queue::{InputQueue, InputSender},
};
pub use utils::profiling::TickProfiler;
pub use world::SandboxWorld;
