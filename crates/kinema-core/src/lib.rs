//! Core types for the KINEMA deterministic physics simulation.
//!
//! This crate defines the vocabulary shared by the simulation and the host
//! bridge: the variable-scale fixed-point number, the 2D vector built on it,
//! the body component, simulation time, and tuning constants. It has no
//! dependency on the simulation or on any host runtime.

pub mod body;
pub mod constants;
pub mod fixed;
pub mod types;
pub mod vec2;

pub use body::Body;
pub use fixed::{Fixed, OverflowError};
pub use types::SimTime;
pub use vec2::Vec2f;
