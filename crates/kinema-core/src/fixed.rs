//! Variable-scale fixed-point arithmetic.
//!
//! `Fixed` stores `value × 2^scale` with the scale carried per value rather
//! than fixed globally. Intermediate products keep full precision (multiply
//! adds scales instead of shifting bits away); the cost is that additive
//! operations must first reconcile both operands to a common scale. Every
//! operation is a pure transformation returning a new value — operands are
//! never mutated, including by comparison.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a fixed-point result would exceed the representable
/// range of the underlying 64-bit storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError;

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed-point value exceeds representable range")
    }
}

impl std::error::Error for OverflowError {}

/// A deterministic real-number approximation: `value × 2^scale`.
///
/// Negative scales denote fractional resolution; `Fixed::new(3, -1)` is 1.5.
/// The same number has many representations (`(1, 0)` equals `(2, -1)`);
/// equality and ordering compare the represented value, not the raw pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fixed {
    value: i64,
    scale: i32,
}

impl Fixed {
    /// Zero at scale 0.
    pub const ZERO: Fixed = Fixed { value: 0, scale: 0 };

    /// Construct `value × 2^scale`. Any pair is valid input.
    pub const fn new(value: i64, scale: i32) -> Self {
        Self { value, scale }
    }

    /// Construct an integer at scale 0.
    pub const fn from_int(value: i64) -> Self {
        Self { value, scale: 0 }
    }

    /// Raw stored integer.
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Raw stored scale exponent.
    pub const fn scale(self) -> i32 {
        self.scale
    }

    /// An equivalent value at `target` scale.
    ///
    /// Toward a smaller (more negative) scale the magnitude grows: the raw
    /// integer is left-shifted by the scale difference, with the sign handled
    /// by negating, shifting, and re-negating so both signs shift
    /// symmetrically. Fails with [`OverflowError`] when the shifted magnitude
    /// no longer fits in 64 bits.
    ///
    /// Toward a larger scale the magnitude shrinks and excess fractional bits
    /// are truncated toward zero (same magnitude rule, so -5 at scale 0
    /// becomes -2 at scale 1, not -3).
    pub fn rescaled(self, target: i32) -> Result<Fixed, OverflowError> {
        if target == self.scale {
            return Ok(self);
        }
        let shift = i64::from(self.scale) - i64::from(target);
        if shift > 0 {
            // Finer scale: magnitude must grow.
            if self.value == 0 {
                return Ok(Fixed::new(0, target));
            }
            let magnitude = self.value.unsigned_abs();
            if shift >= 64 || u64::from(magnitude.leading_zeros()) < shift as u64 {
                return Err(OverflowError);
            }
            let shifted = magnitude << shift;
            let limit = if self.value < 0 {
                (i64::MAX as u64) + 1
            } else {
                i64::MAX as u64
            };
            if shifted > limit {
                return Err(OverflowError);
            }
            let value = if self.value < 0 {
                (shifted as i64).wrapping_neg()
            } else {
                shifted as i64
            };
            Ok(Fixed::new(value, target))
        } else {
            // Coarser scale: truncate excess fractional bits toward zero.
            let shift = -shift;
            if shift >= 64 {
                return Ok(Fixed::new(0, target));
            }
            let magnitude = self.value.unsigned_abs() >> shift;
            let value = if self.value < 0 {
                -(magnitude as i64)
            } else {
                magnitude as i64
            };
            Ok(Fixed::new(value, target))
        }
    }

    /// Sum at the common minimum scale of the operands.
    pub fn try_add(self, other: Fixed) -> Result<Fixed, OverflowError> {
        if self.scale == other.scale {
            let value = self.value.checked_add(other.value).ok_or(OverflowError)?;
            return Ok(Fixed::new(value, self.scale));
        }
        let common = self.scale.min(other.scale);
        let a = self.rescaled(common)?;
        let b = other.rescaled(common)?;
        let value = a.value.checked_add(b.value).ok_or(OverflowError)?;
        Ok(Fixed::new(value, common))
    }

    /// Difference, defined as `self + (-other)`.
    pub fn try_sub(self, other: Fixed) -> Result<Fixed, OverflowError> {
        self.try_add(-other)
    }

    /// Product: raw values multiply, scales add. No rescaling beforehand.
    pub fn try_mul(self, other: Fixed) -> Result<Fixed, OverflowError> {
        let value = self.value.checked_mul(other.value).ok_or(OverflowError)?;
        let scale = self.scale.checked_add(other.scale).ok_or(OverflowError)?;
        Ok(Fixed::new(value, scale))
    }

    /// Quantize a host-side float to `scale`, rounding to nearest.
    ///
    /// Fails on non-finite input or when the quantized integer exceeds the
    /// storage range. The rounding is the only nondeterminism boundary in the
    /// system: a given `(v, scale)` pair always produces the same `Fixed`.
    pub fn from_f32(v: f32, scale: i32) -> Result<Fixed, OverflowError> {
        if !v.is_finite() {
            return Err(OverflowError);
        }
        let scaled = (f64::from(v) * (-f64::from(scale)).exp2()).round();
        if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(OverflowError);
        }
        Ok(Fixed::new(scaled as i64, scale))
    }

    /// Nearest float to the represented value. Lossy for large magnitudes.
    pub fn to_f32(self) -> f32 {
        (self.value as f64 * f64::from(self.scale).exp2()) as f32
    }

    /// Compare represented values without materializing a common-scale
    /// rescale, so comparison itself can never overflow. Magnitudes are
    /// widened through `u128`; the wider-scaled operand is shifted up to the
    /// finer operand's scale (the common minimum), exactly the normalization
    /// equality is defined by.
    fn cmp_value(self, other: Fixed) -> Ordering {
        let ls = self.value.signum();
        let rs = other.value.signum();
        if ls != rs {
            return ls.cmp(&rs);
        }
        if ls == 0 {
            return Ordering::Equal;
        }
        let (fine, coarse, swapped) = if self.scale <= other.scale {
            (self, other, false)
        } else {
            (other, self, true)
        };
        let shift = i64::from(coarse.scale) - i64::from(fine.scale);
        let magnitude_order = if shift >= 64 {
            // The coarse magnitude is at least 2^64 once shifted; the fine
            // one fits in 63 bits, so the coarse side always dominates.
            Ordering::Less
        } else {
            let fine_mag = u128::from(fine.value.unsigned_abs());
            let coarse_mag = u128::from(coarse.value.unsigned_abs()) << shift;
            fine_mag.cmp(&coarse_mag)
        };
        let magnitude_order = if swapped {
            magnitude_order.reverse()
        } else {
            magnitude_order
        };
        if ls > 0 {
            magnitude_order
        } else {
            magnitude_order.reverse()
        }
    }
}

impl std::ops::Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed::new(-self.value, self.scale)
    }
}

impl PartialEq for Fixed {
    fn eq(&self, other: &Fixed) -> bool {
        self.cmp_value(*other) == Ordering::Equal
    }
}

impl Eq for Fixed {}

impl PartialOrd for Fixed {
    fn partial_cmp(&self, other: &Fixed) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fixed {
    fn cmp(&self, other: &Fixed) -> Ordering {
        self.cmp_value(*other)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.value, self.scale)
    }
}

impl Default for Fixed {
    fn default() -> Self {
        Fixed::ZERO
    }
}
