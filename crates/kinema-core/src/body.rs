//! The simulated body component.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MASS;
use crate::vec2::Vec2f;

/// A point mass with orientation, owned exclusively by one `World`.
///
/// `force` accumulates the impulses a host applies between steps and is
/// cleared after every integration pass. Mass must stay strictly positive;
/// the World's `set_mass` is the enforcement site and `step` re-checks it
/// before integrating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2f,
    pub velocity: Vec2f,
    pub angle: f32,
    pub angular_velocity: f32,
    pub mass: f32,
    pub force: Vec2f,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2f::ZERO,
            velocity: Vec2f::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            mass: DEFAULT_MASS,
            force: Vec2f::ZERO,
        }
    }
}
