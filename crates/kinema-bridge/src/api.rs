//! The host-facing operation set.
//!
//! Free functions over a [`WorldRegistry`], one per boundary operation, all
//! parameterized by `(WorldHandle, BodyId)` where they touch a body. The
//! host owns the registry and drives everything from its own loop; nothing
//! here schedules, threads, or retains references into the simulation.

use kinema_sim::world::{BodyId, WorldError};

use crate::registry::{WorldHandle, WorldRegistry};
use crate::wire::WireVec2;
use crate::BridgeError;

/// Create a world. Infallible; the returned handle stays valid until
/// [`destroy_world`].
pub fn create_world(registry: &mut WorldRegistry) -> WorldHandle {
    registry.create_world()
}

/// Destroy a world and invalidate its handle permanently.
pub fn destroy_world(registry: &mut WorldRegistry, world: WorldHandle) -> Result<(), BridgeError> {
    registry.destroy_world(world)
}

/// Create a body in `world`; the returned id is stable for the world's
/// lifetime.
pub fn create_body(
    registry: &mut WorldRegistry,
    world: WorldHandle,
) -> Result<BodyId, BridgeError> {
    Ok(registry.world_mut(world)?.create_body())
}

/// Advance `world` by `dt` seconds.
pub fn step(registry: &mut WorldRegistry, world: WorldHandle, dt: f32) -> Result<(), BridgeError> {
    registry.world_mut(world)?.step(dt)?;
    Ok(())
}

pub fn get_position(
    registry: &WorldRegistry,
    world: WorldHandle,
    body: BodyId,
) -> Result<WireVec2, BridgeError> {
    let position = registry.world(world)?.position(body)?;
    Ok(WireVec2::from_vec(position).map_err(WorldError::from)?)
}

pub fn set_position(
    registry: &mut WorldRegistry,
    world: WorldHandle,
    body: BodyId,
    position: WireVec2,
) -> Result<(), BridgeError> {
    registry.world_mut(world)?.set_position(body, position.to_vec())?;
    Ok(())
}

pub fn get_velocity(
    registry: &WorldRegistry,
    world: WorldHandle,
    body: BodyId,
) -> Result<WireVec2, BridgeError> {
    let velocity = registry.world(world)?.velocity(body)?;
    Ok(WireVec2::from_vec(velocity).map_err(WorldError::from)?)
}

pub fn set_velocity(
    registry: &mut WorldRegistry,
    world: WorldHandle,
    body: BodyId,
    velocity: WireVec2,
) -> Result<(), BridgeError> {
    registry.world_mut(world)?.set_velocity(body, velocity.to_vec())?;
    Ok(())
}

/// Force accumulated on `body` since the last step.
pub fn get_force(
    registry: &WorldRegistry,
    world: WorldHandle,
    body: BodyId,
) -> Result<WireVec2, BridgeError> {
    let force = registry.world(world)?.force(body)?;
    Ok(WireVec2::from_vec(force).map_err(WorldError::from)?)
}

/// Accumulate `force` on `body`, applied and cleared at the next step.
pub fn add_force(
    registry: &mut WorldRegistry,
    world: WorldHandle,
    body: BodyId,
    force: WireVec2,
) -> Result<(), BridgeError> {
    registry.world_mut(world)?.add_force(body, force.to_vec())?;
    Ok(())
}

pub fn get_mass(
    registry: &WorldRegistry,
    world: WorldHandle,
    body: BodyId,
) -> Result<f32, BridgeError> {
    Ok(registry.world(world)?.mass(body)?)
}

/// Assign `body`'s mass. Non-positive or non-finite values are rejected and
/// leave the stored mass unchanged.
pub fn set_mass(
    registry: &mut WorldRegistry,
    world: WorldHandle,
    body: BodyId,
    mass: f32,
) -> Result<(), BridgeError> {
    registry.world_mut(world)?.set_mass(body, mass)?;
    Ok(())
}
