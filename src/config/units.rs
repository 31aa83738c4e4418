//! Unit types for angular quantities.
//!
//! Positions and distances are expressed in encoder ticks; degrees are only
//! used for diagnostics and the user-facing API.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Angular position or distance in quadrature encoder ticks.
///
/// Uses i64 so that raw, unreduced encoder counts fit in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Ticks(pub i64);

impl Ticks {
    /// The reference heading.
    pub const ZERO: Self = Self(0);

    /// Create a new Ticks value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Convert to degrees given the tick count of one full rotation.
    #[inline]
    pub fn to_degrees(self, ticks_per_rotation: u32) -> Degrees {
        Degrees(self.0 as f32 * 360.0 / ticks_per_rotation as f32)
    }

    /// Create from degrees given the tick count of one full rotation.
    #[inline]
    pub fn from_degrees(degrees: Degrees, ticks_per_rotation: u32) -> Self {
        Self(libm::roundf(degrees.0 * ticks_per_rotation as f32 / 360.0) as i64)
    }
}

impl Add for Ticks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Ticks {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Ticks {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Ticks {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Angular position in degrees, clockwise from the reference heading.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_to_degrees() {
        assert!((Ticks(1024).to_degrees(4096).value() - 90.0).abs() < 0.001);
        assert!((Ticks(-2048).to_degrees(4096).value() + 180.0).abs() < 0.001);
    }

    #[test]
    fn test_degrees_to_ticks() {
        assert_eq!(Ticks::from_degrees(Degrees(270.0), 4096), Ticks(3072));
        assert_eq!(Ticks::from_degrees(Degrees(45.0), 1000), Ticks(125));
    }

    #[test]
    fn test_ticks_arithmetic() {
        assert_eq!(Ticks(10) - Ticks(4090), Ticks(-4080));
        assert_eq!(Ticks(10) + Ticks(6), Ticks(16));
        assert_eq!(-Ticks(16), Ticks(-16));
        assert_eq!(Ticks(-16).abs(), 16);
    }
}
