//! Error types for the sandbox core.
//!
//! This module provides a unified error type [`SandboxError`] and a convenient [`Result`] alias.

use std::fmt;

use crate::core::particle::ParticleId;

/// Main error type for the sandbox core.
#[derive(Debug, Clone, PartialEq)]
pub enum SandboxError {
    /// A particle was requested with a zero, negative or non-finite mass.
    InvalidMass(f32),
    /// A particle was requested with a zero, negative or non-finite radius.
    InvalidRadius(f32),
    /// An id that the store never issued.
    UnknownParticle(ParticleId),
    /// A configuration value is outside its usable range.
    InvalidConfig(String),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidMass(mass) => write!(f, "Invalid particle mass: {mass}"),
            Self::InvalidRadius(radius) => write!(f, "Invalid particle radius: {radius}"),
            Self::UnknownParticle(id) => write!(f, "Unknown particle: {id}"),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SandboxError {}

/// Convenient Result type alias for sandbox operations.
pub type Result<T> = std::result::Result<T, SandboxError>;
