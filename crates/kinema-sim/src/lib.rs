//! Headless deterministic simulation for KINEMA.
//!
//! Owns the body storage, integrates motion once per `step(dt)`, and
//! produces serializable [`snapshot::WorldSnapshot`]s. Completely host-
//! agnostic: no runtime framework, no logging, no clock of its own —
//! determinism is verified by comparing snapshots across runs.

pub mod snapshot;
pub mod world;

pub use kinema_core as core;
pub use world::{BodyId, World, WorldError};

#[cfg(test)]
mod tests;
