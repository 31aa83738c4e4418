//! Position tracking in a circular tick space.
//!
//! Raw encoder counts grow without bound in either direction; the controller
//! only ever works with positions reduced into one rotation.

use crate::config::Ticks;

/// Reduces raw counts into `[0, ticks_per_rotation)` and measures distances
/// around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionTracker {
    ticks_per_rotation: i64,
}

impl PositionTracker {
    /// Create a tracker for a rotation of `ticks_per_rotation` ticks.
    ///
    /// # Panics
    ///
    /// Panics if `ticks_per_rotation` is zero.
    #[inline]
    pub fn new(ticks_per_rotation: u32) -> Self {
        assert!(ticks_per_rotation > 0, "ticks_per_rotation must be non-zero");
        Self {
            ticks_per_rotation: i64::from(ticks_per_rotation),
        }
    }

    /// Ticks in one full rotation.
    #[inline]
    pub fn ticks_per_rotation(&self) -> i64 {
        self.ticks_per_rotation
    }

    /// Reduce a raw encoder count into one rotation.
    ///
    /// Negative counts wrap to the top of the range, so `-1` is one tick
    /// short of a full rotation.
    #[inline]
    pub fn normalize(&self, raw: i64) -> Ticks {
        Ticks(raw.rem_euclid(self.ticks_per_rotation))
    }

    /// Direct difference `target - current`, absolute unless `signed`.
    ///
    /// This ignores the wraparound seam; use [`shortest`](Self::shortest) to
    /// pick a travel direction.
    #[inline]
    pub fn remaining(&self, target: Ticks, current: Ticks, signed: bool) -> i64 {
        let delta = target.0 - current.0;
        if signed {
            delta
        } else {
            delta.abs()
        }
    }

    /// Signed distance along the shorter arc from `current` to `target`.
    ///
    /// Both the direct difference and the difference shifted by one rotation
    /// either way are considered. The magnitude never exceeds half a
    /// rotation; an exact half rotation resolves to positive travel.
    pub fn shortest(&self, target: Ticks, current: Ticks) -> i64 {
        let direct = self.normalize(target.0).0 - self.normalize(current.0).0;
        [direct, direct - self.ticks_per_rotation, direct + self.ticks_per_rotation]
            .into_iter()
            .min_by_key(|delta| (delta.unsigned_abs(), *delta < 0))
            .unwrap_or(direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_positive_and_negative() {
        let tracker = PositionTracker::new(4096);

        assert_eq!(tracker.normalize(0), Ticks(0));
        assert_eq!(tracker.normalize(4095), Ticks(4095));
        assert_eq!(tracker.normalize(4096), Ticks(0));
        assert_eq!(tracker.normalize(9000), Ticks(808));
        assert_eq!(tracker.normalize(-50), Ticks(4046));
        assert_eq!(tracker.normalize(-4096), Ticks(0));
    }

    #[test]
    #[should_panic(expected = "ticks_per_rotation must be non-zero")]
    fn test_zero_rotation_rejected() {
        PositionTracker::new(0);
    }

    #[test]
    fn test_remaining_direct() {
        let tracker = PositionTracker::new(4096);

        assert_eq!(tracker.remaining(Ticks(4090), Ticks(10), true), 4080);
        assert_eq!(tracker.remaining(Ticks(10), Ticks(4090), true), -4080);
        assert_eq!(tracker.remaining(Ticks(10), Ticks(4090), false), 4080);
    }

    #[test]
    fn test_shortest_across_seam() {
        let tracker = PositionTracker::new(4096);

        // Direct difference is 4080 forward; the seam is 16 ticks behind
        assert_eq!(tracker.shortest(Ticks(4090), Ticks(10)), -16);
        assert_eq!(tracker.shortest(Ticks(10), Ticks(4090)), 16);
    }

    #[test]
    fn test_shortest_direct() {
        let tracker = PositionTracker::new(4096);

        assert_eq!(tracker.shortest(Ticks(1500), Ticks(1000)), 500);
        assert_eq!(tracker.shortest(Ticks(1000), Ticks(1500)), -500);
        assert_eq!(tracker.shortest(Ticks(700), Ticks(700)), 0);
    }

    #[test]
    fn test_shortest_half_turn_tie() {
        let tracker = PositionTracker::new(4096);

        assert_eq!(tracker.shortest(Ticks(2048), Ticks(0)), 2048);
        assert_eq!(tracker.shortest(Ticks(0), Ticks(2048)), 2048);
    }

    #[test]
    fn test_shortest_unreduced_inputs() {
        let tracker = PositionTracker::new(4096);

        assert_eq!(tracker.shortest(Ticks(0), Ticks(-50)), 50);
        assert_eq!(tracker.shortest(Ticks(8192 + 100), Ticks(4096 - 100)), 200);
    }
}
