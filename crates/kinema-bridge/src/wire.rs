//! Versioned wire layout for vectors crossing the host boundary.

use serde::{Deserialize, Serialize};

use kinema_core::constants::CANONICAL_SCALE;
use kinema_core::fixed::{Fixed, OverflowError};
use kinema_core::Vec2f;

/// Layout version of [`WireVec2`]. Bump on any change to field count,
/// width, or scale.
pub const WIRE_FORMAT_VERSION: u32 = 1;

/// Fixed-point scale of wire vector fields (Q47.16).
pub const WIRE_SCALE: i32 = CANONICAL_SCALE;

/// A vector as the host sees it: two 64-bit fixed-point fields at
/// [`WIRE_SCALE`], wide enough to carry the simulation's representation
/// without truncation.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireVec2 {
    pub x: i64,
    pub y: i64,
}

impl WireVec2 {
    pub const ZERO: WireVec2 = WireVec2 { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Encode a simulation vector, rescaling both components to
    /// [`WIRE_SCALE`]. Fails if a component's magnitude does not fit at the
    /// wire scale; fractional bits finer than the wire scale truncate
    /// toward zero.
    pub fn from_vec(v: Vec2f) -> Result<WireVec2, OverflowError> {
        let rescaled = v.rescaled(WIRE_SCALE)?;
        Ok(WireVec2::new(rescaled.x.value(), rescaled.y.value()))
    }

    /// Decode into a simulation vector. Always exact.
    pub fn to_vec(self) -> Vec2f {
        Vec2f::new(Fixed::new(self.x, WIRE_SCALE), Fixed::new(self.y, WIRE_SCALE))
    }
}
