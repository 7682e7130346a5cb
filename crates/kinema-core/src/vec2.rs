//! 2D vector over fixed-point components.

use serde::{Deserialize, Serialize};

use crate::fixed::{Fixed, OverflowError};

/// A pair of [`Fixed`] components. Used for position, velocity, and force.
///
/// All operations are componentwise applications of the fixed-point
/// operations; the vector adds no invariants of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec2f {
    pub x: Fixed,
    pub y: Fixed,
}

impl Vec2f {
    /// The zero vector, both components at value 0, scale 0.
    pub const ZERO: Vec2f = Vec2f {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Componentwise sum.
    pub fn try_add(self, other: Vec2f) -> Result<Vec2f, OverflowError> {
        Ok(Vec2f::new(self.x.try_add(other.x)?, self.y.try_add(other.y)?))
    }

    /// Componentwise difference.
    pub fn try_sub(self, other: Vec2f) -> Result<Vec2f, OverflowError> {
        Ok(Vec2f::new(self.x.try_sub(other.x)?, self.y.try_sub(other.y)?))
    }

    /// Both components multiplied by the scalar `k`.
    pub fn try_scale(self, k: Fixed) -> Result<Vec2f, OverflowError> {
        Ok(Vec2f::new(self.x.try_mul(k)?, self.y.try_mul(k)?))
    }

    /// Both components rescaled to `target` scale.
    pub fn rescaled(self, target: i32) -> Result<Vec2f, OverflowError> {
        Ok(Vec2f::new(self.x.rescaled(target)?, self.y.rescaled(target)?))
    }
}

impl std::ops::Neg for Vec2f {
    type Output = Vec2f;

    fn neg(self) -> Vec2f {
        Vec2f::new(-self.x, -self.y)
    }
}
