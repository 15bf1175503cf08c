//! Core types describing particles, their storage, and the world extent.

pub mod particle;
pub mod store;
pub mod types;

pub use particle::{Particle, ParticleId, ParticleSnapshot};
pub use store::ParticleStore;
pub use types::WorldBounds;
