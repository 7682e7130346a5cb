//! Host boundary for the KINEMA simulation.
//!
//! A host engine reaches the simulation exclusively through opaque,
//! generation-checked [`WorldHandle`]s resolved by a [`WorldRegistry`] — no
//! raw pointers, no shared memory, no finalizer-driven cleanup. Worlds are
//! created and destroyed by explicit calls; destruction is one-way, and any
//! later use of a stale handle fails with
//! [`BridgeError::UseAfterDestroy`].
//!
//! Vector values cross the boundary in the fixed wire layout of
//! [`wire::WireVec2`]; scalars (`dt`, mass) cross as `f32`.

pub mod api;
pub mod registry;
pub mod wire;

use std::fmt;

use kinema_sim::world::WorldError;
use registry::WorldHandle;

pub use api::{
    add_force, create_body, create_world, destroy_world, get_force, get_mass, get_position,
    get_velocity, set_mass, set_position, set_velocity, step,
};
pub use registry::WorldRegistry;
pub use wire::{WireVec2, WIRE_FORMAT_VERSION, WIRE_SCALE};

/// Failure of a boundary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeError {
    /// The handle refers to a world that was destroyed (or never existed).
    UseAfterDestroy { handle: WorldHandle },
    /// The operation reached the simulation and failed there.
    Sim(WorldError),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::UseAfterDestroy { handle } => {
                write!(f, "world {handle} has been destroyed")
            }
            BridgeError::Sim(err) => write!(f, "simulation error: {err}"),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Sim(err) => Some(err),
            BridgeError::UseAfterDestroy { .. } => None,
        }
    }
}

impl From<WorldError> for BridgeError {
    fn from(err: WorldError) -> Self {
        BridgeError::Sim(err)
    }
}
