//! Azimuth axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Complete configuration of one azimuth axis.
///
/// Every control constant is caller supplied; only the optional extras carry defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AzimuthConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Encoder ticks in one full mechanical rotation of the output.
    pub ticks_per_rotation: u32,

    /// Stick deadband: axis values with magnitude at or below this count as zero.
    pub stick_error: f32,

    /// Remaining distance in ticks above which the fast speed is used.
    pub large_error_threshold: u32,

    /// Remaining distance in ticks at or below which the motor stops.
    pub small_error_threshold: u32,

    /// Percent output used far from the target.
    pub fast_speed: f32,

    /// Percent output used close to the target.
    pub slow_speed: f32,

    /// Forward peak output handed to the motor port.
    pub peak_output_forward: f32,

    /// Reverse peak output handed to the motor port (zero or negative).
    pub peak_output_reverse: f32,

    /// Invert motor output polarity.
    #[serde(default)]
    pub invert_direction: bool,

    /// Maximum homing cycles before the search is declared stalled.
    #[serde(default)]
    pub homing_timeout_cycles: Option<u32>,
}

impl AzimuthConfig {
    /// Ticks in 90 degrees of rotation.
    #[inline]
    pub fn quadrant_span(&self) -> i64 {
        i64::from(self.ticks_per_rotation / 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_span() {
        let config = AzimuthConfig {
            name: String::try_from("test").unwrap(),
            ticks_per_rotation: 4096,
            stick_error: 0.1,
            large_error_threshold: 200,
            small_error_threshold: 20,
            fast_speed: 0.8,
            slow_speed: 0.2,
            peak_output_forward: 1.0,
            peak_output_reverse: -1.0,
            invert_direction: false,
            homing_timeout_cycles: None,
        };

        assert_eq!(config.quadrant_span(), 1024);
    }
}
