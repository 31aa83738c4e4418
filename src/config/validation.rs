//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{AzimuthConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks every axis with [`validate_axis`].
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, axis) in config.axes.iter() {
        validate_axis(axis)?;
    }

    Ok(())
}

/// Validate a single axis configuration.
///
/// Checks:
/// - Ticks per rotation is positive and splits into four equal quadrants
/// - Stick deadband is in [0, 1)
/// - Stop threshold is strictly below the fast threshold
/// - Speeds satisfy 0 < slow <= fast <= 1
/// - Peak outputs bracket zero within [-1, 1]
/// - Homing timeout, if set, is at least one cycle
pub fn validate_axis(config: &AzimuthConfig) -> Result<()> {
    if config.ticks_per_rotation == 0 || config.ticks_per_rotation % 4 != 0 {
        return Err(Error::Config(ConfigError::InvalidTicksPerRotation(
            config.ticks_per_rotation,
        )));
    }

    // NaN fails every comparison, so it is rejected here too
    if !(config.stick_error >= 0.0 && config.stick_error < 1.0) {
        return Err(Error::Config(ConfigError::InvalidStickError(config.stick_error)));
    }

    if config.small_error_threshold >= config.large_error_threshold {
        return Err(Error::Config(ConfigError::InvalidThresholds {
            small: config.small_error_threshold,
            large: config.large_error_threshold,
        }));
    }

    let speeds_ok = config.slow_speed > 0.0
        && config.slow_speed <= config.fast_speed
        && config.fast_speed <= 1.0;
    if !speeds_ok {
        return Err(Error::Config(ConfigError::InvalidSpeeds {
            fast: config.fast_speed,
            slow: config.slow_speed,
        }));
    }

    let peaks_ok = (0.0..=1.0).contains(&config.peak_output_forward)
        && (-1.0..=0.0).contains(&config.peak_output_reverse);
    if !peaks_ok {
        return Err(Error::Config(ConfigError::InvalidPeakOutput {
            forward: config.peak_output_forward,
            reverse: config.peak_output_reverse,
        }));
    }

    if config.homing_timeout_cycles == Some(0) {
        return Err(Error::Config(ConfigError::InvalidHomingTimeout));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_axis() -> AzimuthConfig {
        AzimuthConfig {
            name: heapless::String::try_from("test").unwrap(),
            ticks_per_rotation: 4096,
            stick_error: 0.1,
            large_error_threshold: 200,
            small_error_threshold: 20,
            fast_speed: 0.8,
            slow_speed: 0.2,
            peak_output_forward: 1.0,
            peak_output_reverse: -1.0,
            invert_direction: false,
            homing_timeout_cycles: Some(500),
        }
    }

    #[test]
    fn test_valid_axis() {
        assert!(validate_axis(&valid_axis()).is_ok());
    }

    #[test]
    fn test_ticks_not_divisible_by_four() {
        let mut config = valid_axis();
        config.ticks_per_rotation = 4098;

        assert!(matches!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidTicksPerRotation(4098)))
        ));
    }

    #[test]
    fn test_inverted_thresholds() {
        let mut config = valid_axis();
        config.small_error_threshold = 200;

        assert!(matches!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidThresholds { small: 200, large: 200 }))
        ));
    }

    #[test]
    fn test_slow_faster_than_fast() {
        let mut config = valid_axis();
        config.slow_speed = 0.9;

        assert!(matches!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidSpeeds { .. }))
        ));
    }

    #[test]
    fn test_positive_reverse_peak() {
        let mut config = valid_axis();
        config.peak_output_reverse = 0.5;

        assert!(matches!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidPeakOutput { .. }))
        ));
    }

    #[test]
    fn test_nan_stick_error() {
        let mut config = valid_axis();
        config.stick_error = f32::NAN;

        assert!(validate_axis(&config).is_err());
    }

    #[test]
    fn test_zero_homing_timeout() {
        let mut config = valid_axis();
        config.homing_timeout_cycles = Some(0);

        assert_eq!(
            validate_axis(&config),
            Err(Error::Config(ConfigError::InvalidHomingTimeout))
        );
    }
}
