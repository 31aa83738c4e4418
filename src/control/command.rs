//! Per-cycle control commands.

/// Direction of azimuth travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing tick count.
    Forward,
    /// Decreasing tick count.
    Reverse,
    /// No travel.
    None,
}

impl Direction {
    /// Get direction from a signed tick distance.
    #[inline]
    pub fn from_ticks(ticks: i64) -> Self {
        match ticks {
            t if t > 0 => Direction::Forward,
            t if t < 0 => Direction::Reverse,
            _ => Direction::None,
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
            Direction::None => 0.0,
        }
    }
}

/// Speed tier selected from the remaining distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedTier {
    /// Far from target.
    Fast,
    /// Approaching target.
    Slow,
    /// Within the stop band.
    Stop,
}

/// Output of the motion controller for one cycle.
///
/// `speed` is `Stop` exactly when `direction` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlCommand {
    /// Selected travel direction.
    pub direction: Direction,
    /// Selected speed tier.
    pub speed: SpeedTier,
}

impl ControlCommand {
    /// Zero output.
    pub const STOP: Self = Self {
        direction: Direction::None,
        speed: SpeedTier::Stop,
    };

    /// Travel in `direction` at `speed`.
    ///
    /// Collapses to [`STOP`](Self::STOP) if either part asks for no motion.
    #[inline]
    pub fn new(direction: Direction, speed: SpeedTier) -> Self {
        if direction == Direction::None || speed == SpeedTier::Stop {
            Self::STOP
        } else {
            Self { direction, speed }
        }
    }

    /// Whether this command holds the motor still.
    #[inline]
    pub fn is_stop(&self) -> bool {
        self.speed == SpeedTier::Stop
    }
}

impl Default for ControlCommand {
    fn default() -> Self {
        Self::STOP
    }
}
