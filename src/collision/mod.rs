//! Pairwise disc overlap detection and soft contact response.

pub mod contact;
pub mod resolver;

pub use contact::Contact;
pub use resolver::CollisionResolver;
