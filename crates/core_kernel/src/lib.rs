//! Core Kernel - Foundational types for the movie catalogue
//!
//! This crate provides the fundamental building blocks used across all other
//! crates:
//! - Strongly-typed integer identifiers assigned by the active storage module
//! - The repository port error taxonomy shared by every storage back-end
//! - Marker traits for port implementations

pub mod identifiers;
pub mod ports;

pub use identifiers::{DirectorId, MovieId, StudioId};
pub use ports::{ConstraintViolation, DomainPort, PortError};
