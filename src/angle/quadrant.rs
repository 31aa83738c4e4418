//! Cartesian quadrant classification of stick vectors.

use crate::error::ControlError;

/// One of the four open quadrants of the stick plane.
///
/// A vector lying exactly on either axis belongs to no quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quadrant {
    /// x > 0, y > 0
    First,
    /// x < 0, y > 0
    Second,
    /// x < 0, y < 0
    Third,
    /// x > 0, y < 0
    Fourth,
}

impl Quadrant {
    /// Classify a vector by the signs of its components.
    ///
    /// Returns `None` when either component is zero or not a number.
    pub fn classify(x: f32, y: f32) -> Option<Self> {
        if x > 0.0 && y > 0.0 {
            Some(Quadrant::First)
        } else if x < 0.0 && y > 0.0 {
            Some(Quadrant::Second)
        } else if x < 0.0 && y < 0.0 {
            Some(Quadrant::Third)
        } else if x > 0.0 && y < 0.0 {
            Some(Quadrant::Fourth)
        } else {
            None
        }
    }

    /// Conventional quadrant number (1-4).
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }

    /// Whether the quadrant lies on the positive-x half plane.
    #[inline]
    pub const fn is_east(self) -> bool {
        matches!(self, Quadrant::First | Quadrant::Fourth)
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = ControlError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quadrant::First),
            2 => Ok(Quadrant::Second),
            3 => Ok(Quadrant::Third),
            4 => Ok(Quadrant::Fourth),
            other => Err(ControlError::QuadrantOutOfRange(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quadrants() {
        assert_eq!(Quadrant::classify(0.5, 0.5), Some(Quadrant::First));
        assert_eq!(Quadrant::classify(-0.5, 0.5), Some(Quadrant::Second));
        assert_eq!(Quadrant::classify(-0.5, -0.5), Some(Quadrant::Third));
        assert_eq!(Quadrant::classify(0.5, -0.5), Some(Quadrant::Fourth));
    }

    #[test]
    fn test_axes_are_not_quadrants() {
        assert_eq!(Quadrant::classify(0.0, 0.7), None);
        assert_eq!(Quadrant::classify(-0.7, 0.0), None);
        assert_eq!(Quadrant::classify(0.0, 0.0), None);
        assert_eq!(Quadrant::classify(f32::NAN, 0.3), None);
    }

    #[test]
    fn test_quadrant_numbers_round_trip() {
        for n in 1..=4u8 {
            assert_eq!(Quadrant::try_from(n).unwrap().number(), n);
        }
        assert_eq!(Quadrant::try_from(0), Err(ControlError::QuadrantOutOfRange(0)));
        assert_eq!(Quadrant::try_from(5), Err(ControlError::QuadrantOutOfRange(5)));
    }
}
