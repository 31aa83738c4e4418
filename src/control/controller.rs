//! Tiered bang-bang controller.
//!
//! Each cycle the controller measures the shorter arc to the target and
//! picks a direction and one of three speed tiers:
//!
//! | `|remaining|`                  | tier |
//! |--------------------------------|------|
//! | `> large_error_threshold`      | Fast |
//! | `(small, large]`               | Slow |
//! | `<= small_error_threshold`     | Stop |
//!
//! The signed percent output is `sign(remaining) * tier_speed`, which is also
//! what the continuous "drive to ticks" mode applies.

use crate::angle::Quadrant;
use crate::config::{AzimuthConfig, Ticks};
use crate::error::ControlError;

use super::command::{ControlCommand, Direction, SpeedTier};
use super::tracker::PositionTracker;

/// Stateless per-cycle motion controller.
#[derive(Debug, Clone, Copy)]
pub struct MotionController {
    tracker: PositionTracker,
    large_error_threshold: u64,
    small_error_threshold: u64,
    fast_speed: f32,
    slow_speed: f32,
}

impl MotionController {
    /// Create a controller from an axis configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.ticks_per_rotation` is zero; validate the
    /// configuration first.
    pub fn from_config(config: &AzimuthConfig) -> Self {
        Self {
            tracker: PositionTracker::new(config.ticks_per_rotation),
            large_error_threshold: u64::from(config.large_error_threshold),
            small_error_threshold: u64::from(config.small_error_threshold),
            fast_speed: config.fast_speed,
            slow_speed: config.slow_speed,
        }
    }

    /// The position tracker used for distance calculations.
    #[inline]
    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    /// Speed tier for an absolute remaining distance.
    #[inline]
    pub fn tier(&self, distance: u64) -> SpeedTier {
        if distance > self.large_error_threshold {
            SpeedTier::Fast
        } else if distance > self.small_error_threshold {
            SpeedTier::Slow
        } else {
            SpeedTier::Stop
        }
    }

    /// Compute the command for one cycle.
    pub fn step(&self, current: Ticks, target: Ticks) -> ControlCommand {
        let remaining = self.tracker.shortest(target, current);
        ControlCommand::new(
            Direction::from_ticks(remaining),
            self.tier(remaining.unsigned_abs()),
        )
    }

    /// Compute the command for one cycle given a raw quadrant label.
    ///
    /// Travel always follows the shorter arc, so a valid label does not
    /// change the result.
    ///
    /// # Errors
    ///
    /// `ControlError::QuadrantOutOfRange` for labels outside 1..=4; the caller
    /// must command [`ControlCommand::STOP`] for that cycle.
    pub fn step_in_quadrant(
        &self,
        current: Ticks,
        target: Ticks,
        quadrant: u8,
    ) -> Result<ControlCommand, ControlError> {
        Quadrant::try_from(quadrant)?;
        Ok(self.step(current, target))
    }

    /// Percent output for a command.
    #[inline]
    pub fn output(&self, command: ControlCommand) -> f32 {
        let speed = match command.speed {
            SpeedTier::Fast => self.fast_speed,
            SpeedTier::Slow => self.slow_speed,
            SpeedTier::Stop => 0.0,
        };
        command.direction.sign() * speed
    }

    /// Signed percent output toward `target`.
    #[inline]
    pub fn drive_output(&self, current: Ticks, target: Ticks) -> f32 {
        self.output(self.step(current, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> MotionController {
        controller_with_stop_band(20)
    }

    fn controller_with_stop_band(small: u32) -> MotionController {
        MotionController::from_config(&AzimuthConfig {
            name: heapless::String::try_from("test").unwrap(),
            ticks_per_rotation: 4096,
            stick_error: 0.1,
            large_error_threshold: 200,
            small_error_threshold: small,
            fast_speed: 0.8,
            slow_speed: 0.2,
            peak_output_forward: 1.0,
            peak_output_reverse: -1.0,
            invert_direction: false,
            homing_timeout_cycles: None,
        })
    }

    #[test]
    fn test_tier_boundaries() {
        let c = controller();

        assert_eq!(c.tier(0), SpeedTier::Stop);
        assert_eq!(c.tier(20), SpeedTier::Stop);
        assert_eq!(c.tier(21), SpeedTier::Slow);
        assert_eq!(c.tier(200), SpeedTier::Slow);
        assert_eq!(c.tier(201), SpeedTier::Fast);
    }

    #[test]
    fn test_wraparound_prefers_short_reverse_path() {
        // 16 ticks back across the seam, outside a 10 tick stop band
        let c = controller_with_stop_band(10);
        let command = c.step(Ticks(10), Ticks(4090));
        assert_eq!(command, ControlCommand::new(Direction::Reverse, SpeedTier::Slow));
        assert!((c.output(command) + 0.2).abs() < f32::EPSILON);

        // The same 16 ticks sit inside a 20 tick stop band
        assert_eq!(controller().step(Ticks(10), Ticks(4090)), ControlCommand::STOP);
    }

    #[test]
    fn test_wraparound_slow_band() {
        let c = controller();

        // 196 ticks back across the seam versus 3900 forward
        let command = c.step(Ticks(100), Ticks(4000));
        assert_eq!(command, ControlCommand::new(Direction::Reverse, SpeedTier::Slow));
        assert!((c.output(command) + 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fast_forward() {
        let c = controller();

        let command = c.step(Ticks(0), Ticks(1024));
        assert_eq!(command, ControlCommand::new(Direction::Forward, SpeedTier::Fast));
        assert!((c.drive_output(Ticks(0), Ticks(1024)) - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_reverse_is_symmetric() {
        let c = controller();

        // Target behind current within the western half must still reverse
        assert_eq!(c.drive_output(Ticks(3000), Ticks(2600)), -0.8);
        assert_eq!(c.drive_output(Ticks(2600), Ticks(3000)), 0.8);
        assert_eq!(c.drive_output(Ticks(3000), Ticks(2900)), -0.2);
    }

    #[test]
    fn test_converged_stops() {
        let c = controller();

        assert_eq!(c.step(Ticks(0), Ticks(0)), ControlCommand::STOP);
        assert_eq!(c.step(Ticks(4090), Ticks(4)), ControlCommand::STOP);
        assert_eq!(c.drive_output(Ticks(100), Ticks(110)), 0.0);
    }

    #[test]
    fn test_invalid_quadrant_label() {
        let c = controller();

        assert_eq!(
            c.step_in_quadrant(Ticks(0), Ticks(1024), 7),
            Err(ControlError::QuadrantOutOfRange(7))
        );
        assert_eq!(
            c.step_in_quadrant(Ticks(0), Ticks(1024), 2),
            Ok(c.step(Ticks(0), Ticks(1024)))
        );
    }
}
