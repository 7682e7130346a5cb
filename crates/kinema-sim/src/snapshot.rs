//! Serializable world-state snapshots.
//!
//! Snapshots carry the raw fixed-point representation (integers, not
//! floats), so two snapshots serialize identically exactly when the
//! simulation states are bit-identical. Determinism tests compare the
//! serialized form directly.

use serde::{Deserialize, Serialize};

use kinema_core::Vec2f;

use crate::world::{BodyId, World};

/// One body's full state at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vec2f,
    pub velocity: Vec2f,
    pub angle: f32,
    pub angular_velocity: f32,
    pub mass: f32,
    pub force: Vec2f,
}

/// Full simulation state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub bodies: Vec<BodySnapshot>,
}

/// Capture the complete state of `world`, bodies in creation order.
pub fn build_snapshot(world: &World) -> WorldSnapshot {
    let bodies = world
        .bodies()
        .iter()
        .enumerate()
        .map(|(index, body)| BodySnapshot {
            id: BodyId::new(index as u32),
            position: body.position,
            velocity: body.velocity,
            angle: body.angle,
            angular_velocity: body.angular_velocity,
            mass: body.mass,
            force: body.force,
        })
        .collect();

    WorldSnapshot {
        tick: world.time().tick,
        elapsed_secs: world.time().elapsed_secs,
        bodies,
    }
}
