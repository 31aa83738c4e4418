//! Stick vector to target tick resolution.
//!
//! Headings are measured clockwise from the positive y axis ("north"), so
//! north maps to tick 0, east to one quadrant span, south to two and west to
//! three.

use core::f32::consts::FRAC_PI_2;

use libm::{atanf, roundf};

use crate::config::{AzimuthConfig, Ticks};
use crate::error::ControlError;

use super::quadrant::Quadrant;

/// A resolved stick heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// Target position in `[0, ticks_per_rotation)`.
    pub target: Ticks,
    /// Quadrant of the input, `None` for on-axis and neutral input.
    pub quadrant: Option<Quadrant>,
}

/// Converts stick vectors into absolute target positions.
#[derive(Debug, Clone, Copy)]
pub struct AngleResolver {
    ticks_per_rotation: i64,
    stick_error: f32,
}

impl AngleResolver {
    /// Create a resolver for a rotation of `ticks_per_rotation` ticks.
    ///
    /// # Panics
    ///
    /// Panics if `ticks_per_rotation` is zero. Configurations that passed
    /// [`validate_axis`](crate::config::validate_axis) never are.
    pub fn new(ticks_per_rotation: u32, stick_error: f32) -> Self {
        assert!(ticks_per_rotation > 0, "ticks_per_rotation must be non-zero");
        Self {
            ticks_per_rotation: i64::from(ticks_per_rotation),
            stick_error,
        }
    }

    /// Create a resolver from an axis configuration.
    pub fn from_config(config: &AzimuthConfig) -> Self {
        Self::new(config.ticks_per_rotation, config.stick_error)
    }

    /// Ticks in 90 degrees of rotation.
    #[inline]
    pub fn quadrant_span(&self) -> i64 {
        self.ticks_per_rotation / 4
    }

    /// Classify and resolve a stick vector in one call.
    pub fn resolve(&self, x: f32, y: f32) -> Result<Heading, ControlError> {
        let quadrant = Quadrant::classify(x, y);
        let target = self.resolve_target(x, y, quadrant)?;
        Ok(Heading { target, quadrant })
    }

    /// Resolve a stick vector to a target position.
    ///
    /// Neutral input maps to the reference heading; input within the deadband
    /// of one axis snaps to the nearest cardinal heading regardless of the
    /// magnitude of the other component. Off-axis input needs `quadrant` to
    /// fold the half-turn range of `atan` back onto the full circle.
    ///
    /// # Errors
    ///
    /// `ControlError::InvalidInput` if a component is not finite, or the
    /// vector is off-axis and no quadrant was supplied.
    pub fn resolve_target(
        &self,
        x: f32,
        y: f32,
        quadrant: Option<Quadrant>,
    ) -> Result<Ticks, ControlError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ControlError::InvalidInput { x, y });
        }

        let x_on_axis = self.in_deadband(x);
        let y_on_axis = self.in_deadband(y);

        let multiplier = match (x_on_axis, y_on_axis) {
            (true, true) => 0.0,
            (false, true) => {
                if x >= 0.0 {
                    1.0
                } else {
                    3.0
                }
            }
            (true, false) => {
                if y >= 0.0 {
                    0.0
                } else {
                    2.0
                }
            }
            (false, false) => {
                let quadrant = quadrant.ok_or(ControlError::InvalidInput { x, y })?;
                // x is non-zero here: exact zeros are always on-axis
                let ratio = (FRAC_PI_2 - atanf(y / x)) / FRAC_PI_2;
                if quadrant.is_east() {
                    ratio
                } else {
                    2.0 + ratio
                }
            }
        };

        let ticks = roundf(multiplier * self.quadrant_span() as f32) as i64;
        Ok(Ticks(ticks.rem_euclid(self.ticks_per_rotation)))
    }

    #[inline]
    fn in_deadband(&self, value: f32) -> bool {
        value == 0.0 || (-self.stick_error..=self.stick_error).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AngleResolver {
        AngleResolver::new(4096, 0.1)
    }

    fn target(x: f32, y: f32) -> i64 {
        resolver().resolve(x, y).unwrap().target.value()
    }

    #[test]
    fn test_neutral_stick() {
        assert_eq!(target(0.0, 0.0), 0);
        assert_eq!(target(0.05, -0.08), 0);
    }

    #[test]
    fn test_cardinal_headings() {
        assert_eq!(target(0.0, 1.0), 0);
        assert_eq!(target(1.0, 0.0), 1024);
        assert_eq!(target(0.0, -1.0), 2048);
        assert_eq!(target(-1.0, 0.0), 3072);
    }

    #[test]
    fn test_cardinal_ignores_magnitude() {
        assert_eq!(target(0.2, 0.09), 1024);
        assert_eq!(target(-0.3, -0.1), 3072);
        assert_eq!(target(0.1, -0.4), 2048);
        assert_eq!(target(-0.05, 0.15), 0);
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(target(1.0, 1.0), 512);
        assert_eq!(target(1.0, -1.0), 1536);
        assert_eq!(target(-1.0, -1.0), 2560);
        assert_eq!(target(-1.0, 1.0), 3584);
    }

    #[test]
    fn test_heading_reports_quadrant() {
        let heading = resolver().resolve(-0.6, 0.4).unwrap();
        assert_eq!(heading.quadrant, Some(Quadrant::Second));

        let heading = resolver().resolve(0.6, 0.0).unwrap();
        assert_eq!(heading.quadrant, None);
    }

    #[test]
    fn test_near_north_wraps_to_zero() {
        let resolver = AngleResolver::new(4096, 0.0);
        let heading = resolver.resolve(-1.0e-6, 1.0).unwrap();
        assert_eq!(heading.target, Ticks(0));
    }

    #[test]
    fn test_exact_zero_outside_deadband() {
        let resolver = AngleResolver::new(4096, 0.0);
        assert_eq!(resolver.resolve(0.0, -0.5).unwrap().target, Ticks(2048));
        assert_eq!(resolver.resolve(-0.5, 0.0).unwrap().target, Ticks(3072));
    }

    #[test]
    fn test_off_axis_without_quadrant() {
        assert_eq!(
            resolver().resolve_target(0.5, 0.5, None),
            Err(ControlError::InvalidInput { x: 0.5, y: 0.5 })
        );
    }

    #[test]
    #[should_panic(expected = "ticks_per_rotation must be non-zero")]
    fn test_zero_rotation_rejected() {
        AngleResolver::new(0, 0.1);
    }

    #[test]
    fn test_non_finite_input() {
        assert!(resolver().resolve(f32::NAN, 0.5).is_err());
        assert!(resolver().resolve(0.5, f32::INFINITY).is_err());
    }
}
