//! The world: body storage, accessors, and the integration step.

use std::fmt;

use serde::{Deserialize, Serialize};

use kinema_core::constants::CANONICAL_SCALE;
use kinema_core::fixed::{Fixed, OverflowError};
use kinema_core::{Body, SimTime, Vec2f};

use crate::snapshot::{self, WorldSnapshot};

/// Stable identifier for a body within one world.
///
/// Ids are plain creation-order indices: bodies live as long as their world,
/// so an index is never invalidated or reused. Ids from one world are
/// meaningless in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId {
    pub index: u32,
}

impl BodyId {
    pub fn new(index: u32) -> Self {
        Self { index }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}", self.index)
    }
}

/// Failure of a world operation. All failures are synchronous and leave the
/// targeted body unmodified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldError {
    /// A fixed-point result exceeded the representable range.
    Overflow,
    /// A body's mass is non-positive or non-finite.
    InvalidMass { mass: f32 },
    /// The id was not issued by this world.
    UnknownBody { id: BodyId },
    /// `step` was called with a non-finite or negative `dt`.
    InvalidTimeStep { dt: f32 },
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::Overflow => write!(f, "arithmetic overflow during simulation"),
            WorldError::InvalidMass { mass } => {
                write!(f, "invalid body mass {mass} (must be finite and positive)")
            }
            WorldError::UnknownBody { id } => write!(f, "unknown body {id}"),
            WorldError::InvalidTimeStep { dt } => write!(f, "invalid time step {dt}"),
        }
    }
}

impl std::error::Error for WorldError {}

impl From<OverflowError> for WorldError {
    fn from(_: OverflowError) -> Self {
        WorldError::Overflow
    }
}

/// Owns all simulated bodies and advances them one `step(dt)` at a time.
///
/// Single-threaded and non-reentrant: a step runs to completion before any
/// other operation is possible, and the world never shares body references —
/// external code holds only [`BodyId`]s, so storage may reallocate freely.
pub struct World {
    bodies: Vec<Body>,
    time: SimTime,
    gravity: Vec2f,
}

impl World {
    /// A world with no ambient forces; every force comes from the host.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            time: SimTime::default(),
            gravity: Vec2f::ZERO,
        }
    }

    /// A world that applies `force += mass × gravity` to every body each step.
    pub fn with_gravity(gravity: Vec2f) -> Self {
        Self {
            bodies: Vec::new(),
            time: SimTime::default(),
            gravity,
        }
    }

    /// Create a body with default state and return its id.
    pub fn create_body(&mut self) -> BodyId {
        let id = BodyId::new(self.bodies.len() as u32);
        self.bodies.push(Body::default());
        id
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// All bodies in creation order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn gravity(&self) -> Vec2f {
        self.gravity
    }

    pub fn body(&self, id: BodyId) -> Result<&Body, WorldError> {
        self.bodies
            .get(id.index as usize)
            .ok_or(WorldError::UnknownBody { id })
    }

    /// Direct mutable access to a body's components.
    ///
    /// Invariants skipped here (mass positivity) are re-validated by `step`;
    /// prefer the typed accessors.
    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut Body, WorldError> {
        self.bodies
            .get_mut(id.index as usize)
            .ok_or(WorldError::UnknownBody { id })
    }

    pub fn position(&self, id: BodyId) -> Result<Vec2f, WorldError> {
        Ok(self.body(id)?.position)
    }

    pub fn set_position(&mut self, id: BodyId, position: Vec2f) -> Result<(), WorldError> {
        self.body_mut(id)?.position = position;
        Ok(())
    }

    pub fn velocity(&self, id: BodyId) -> Result<Vec2f, WorldError> {
        Ok(self.body(id)?.velocity)
    }

    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec2f) -> Result<(), WorldError> {
        self.body_mut(id)?.velocity = velocity;
        Ok(())
    }

    /// The force accumulated since the last step.
    pub fn force(&self, id: BodyId) -> Result<Vec2f, WorldError> {
        Ok(self.body(id)?.force)
    }

    /// Accumulate a force to be applied at the next step.
    pub fn add_force(&mut self, id: BodyId, force: Vec2f) -> Result<(), WorldError> {
        let body = self.body_mut(id)?;
        let total = body.force.try_add(force)?;
        body.force = total;
        Ok(())
    }

    pub fn mass(&self, id: BodyId) -> Result<f32, WorldError> {
        Ok(self.body(id)?.mass)
    }

    /// Assign a body's mass, rejecting non-positive or non-finite values.
    /// The stored mass is unchanged on failure.
    pub fn set_mass(&mut self, id: BodyId, mass: f32) -> Result<(), WorldError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(WorldError::InvalidMass { mass });
        }
        self.body_mut(id)?.mass = mass;
        Ok(())
    }

    pub fn angle(&self, id: BodyId) -> Result<f32, WorldError> {
        Ok(self.body(id)?.angle)
    }

    pub fn set_angle(&mut self, id: BodyId, angle: f32) -> Result<(), WorldError> {
        self.body_mut(id)?.angle = angle;
        Ok(())
    }

    pub fn angular_velocity(&self, id: BodyId) -> Result<f32, WorldError> {
        Ok(self.body(id)?.angular_velocity)
    }

    pub fn set_angular_velocity(&mut self, id: BodyId, omega: f32) -> Result<(), WorldError> {
        self.body_mut(id)?.angular_velocity = omega;
        Ok(())
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Every live body is integrated exactly once:
    /// `velocity += force × dt/mass`, then `position += velocity × dt` with
    /// the just-updated velocity, then `angle += angular_velocity × dt`.
    /// Accumulated force resets to zero afterwards — forces are per-step
    /// impulses, not persistent. Integrated state is renormalized to
    /// `CANONICAL_SCALE` so working scales stay bounded over long runs.
    ///
    /// Masses are validated for every body before anything is mutated, and
    /// each body's update is committed whole, so a failing step never leaves
    /// a partially-integrated body behind.
    pub fn step(&mut self, dt: f32) -> Result<(), WorldError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(WorldError::InvalidTimeStep { dt });
        }
        for body in &self.bodies {
            if !body.mass.is_finite() || body.mass <= 0.0 {
                return Err(WorldError::InvalidMass { mass: body.mass });
            }
        }

        let dt_fixed = Fixed::from_f32(dt, CANONICAL_SCALE)?;
        let has_gravity = self.gravity != Vec2f::ZERO;

        for body in &mut self.bodies {
            let mut force = body.force;
            if has_gravity {
                let mass = Fixed::from_f32(body.mass, CANONICAL_SCALE)?;
                force = force.try_add(self.gravity.try_scale(mass)?)?;
            }

            let per_mass_dt = Fixed::from_f32(dt / body.mass, CANONICAL_SCALE)?;
            let velocity = body
                .velocity
                .try_add(force.try_scale(per_mass_dt)?)?
                .rescaled(CANONICAL_SCALE)?;
            let position = body
                .position
                .try_add(velocity.try_scale(dt_fixed)?)?
                .rescaled(CANONICAL_SCALE)?;
            let angle = body.angle + body.angular_velocity * dt;

            body.velocity = velocity;
            body.position = position;
            body.angle = angle;
            body.force = Vec2f::ZERO;
        }

        self.time.advance(dt);
        Ok(())
    }

    /// Serializable capture of the full simulation state.
    pub fn snapshot(&self) -> WorldSnapshot {
        snapshot::build_snapshot(self)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
