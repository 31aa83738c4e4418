//! Builder pattern for AzimuthMotor.

use heapless::String;

use crate::config::{AzimuthConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::AzimuthMotor;
use super::ports::{EncoderPort, MotorPort, ProximitySensor};

/// Builder for creating AzimuthMotor instances.
pub struct AzimuthMotorBuilder<M, E, P>
where
    M: MotorPort,
    E: EncoderPort,
    P: ProximitySensor,
{
    motor: Option<M>,
    encoder: Option<E>,
    proximity: Option<P>,
    name: Option<String<32>>,
    ticks_per_rotation: Option<u32>,
    stick_error: Option<f32>,
    large_error_threshold: Option<u32>,
    small_error_threshold: Option<u32>,
    fast_speed: Option<f32>,
    slow_speed: Option<f32>,
    peak_output_forward: Option<f32>,
    peak_output_reverse: Option<f32>,
    invert_direction: bool,
    homing_timeout_cycles: Option<u32>,
}

impl<M, E, P> Default for AzimuthMotorBuilder<M, E, P>
where
    M: MotorPort,
    E: EncoderPort,
    P: ProximitySensor,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M, E, P> AzimuthMotorBuilder<M, E, P>
where
    M: MotorPort,
    E: EncoderPort,
    P: ProximitySensor,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            motor: None,
            encoder: None,
            proximity: None,
            name: None,
            ticks_per_rotation: None,
            stick_error: None,
            large_error_threshold: None,
            small_error_threshold: None,
            fast_speed: None,
            slow_speed: None,
            peak_output_forward: None,
            peak_output_reverse: None,
            invert_direction: false,
            homing_timeout_cycles: None,
        }
    }

    /// Set the motor port.
    pub fn motor(mut self, motor: M) -> Self {
        self.motor = Some(motor);
        self
    }

    /// Set the encoder port.
    pub fn encoder(mut self, encoder: E) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Set the proximity sensor port.
    pub fn proximity(mut self, proximity: P) -> Self {
        self.proximity = Some(proximity);
        self
    }

    /// Set the axis name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = String::try_from(name).ok();
        self
    }

    /// Set encoder ticks per full rotation.
    pub fn ticks_per_rotation(mut self, ticks: u32) -> Self {
        self.ticks_per_rotation = Some(ticks);
        self
    }

    /// Set the stick deadband.
    pub fn stick_error(mut self, deadband: f32) -> Self {
        self.stick_error = Some(deadband);
        self
    }

    /// Set the fast and stop thresholds in ticks.
    pub fn error_thresholds(mut self, large: u32, small: u32) -> Self {
        self.large_error_threshold = Some(large);
        self.small_error_threshold = Some(small);
        self
    }

    /// Set the fast and slow percent outputs.
    pub fn speeds(mut self, fast: f32, slow: f32) -> Self {
        self.fast_speed = Some(fast);
        self.slow_speed = Some(slow);
        self
    }

    /// Set the peak outputs handed to the motor port.
    pub fn peak_output(mut self, forward: f32, reverse: f32) -> Self {
        self.peak_output_forward = Some(forward);
        self.peak_output_reverse = Some(reverse);
        self
    }

    /// Set output polarity inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Bound the homing search to `cycles` control cycles.
    pub fn homing_timeout_cycles(mut self, cycles: u32) -> Self {
        self.homing_timeout_cycles = Some(cycles);
        self
    }

    /// Configure from an AzimuthConfig.
    pub fn from_axis_config(mut self, config: &AzimuthConfig) -> Self {
        self.name = Some(config.name.clone());
        self.ticks_per_rotation = Some(config.ticks_per_rotation);
        self.stick_error = Some(config.stick_error);
        self.large_error_threshold = Some(config.large_error_threshold);
        self.small_error_threshold = Some(config.small_error_threshold);
        self.fast_speed = Some(config.fast_speed);
        self.slow_speed = Some(config.slow_speed);
        self.peak_output_forward = Some(config.peak_output_forward);
        self.peak_output_reverse = Some(config.peak_output_reverse);
        self.invert_direction = config.invert_direction;
        self.homing_timeout_cycles = config.homing_timeout_cycles;
        self
    }

    /// Configure from SystemConfig by axis name.
    pub fn from_config(self, config: &SystemConfig, axis_name: &str) -> Result<Self> {
        let axis_config = config.axis(axis_name).ok_or_else(|| {
            Error::Config(ConfigError::AxisNotFound(
                String::try_from(axis_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_axis_config(axis_config))
    }

    /// Build the AzimuthMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if a port or control constant is missing, the
    /// constants fail validation, or the motor rejects its peak outputs.
    pub fn build(self) -> Result<AzimuthMotor<M, E, P>> {
        let motor = self.motor.ok_or(ConfigError::MissingPart("motor"))?;
        let encoder = self.encoder.ok_or(ConfigError::MissingPart("encoder"))?;
        let proximity = self.proximity.ok_or(ConfigError::MissingPart("proximity"))?;

        let config = AzimuthConfig {
            name: self.name.unwrap_or_else(|| {
                let mut name = String::new();
                let _ = name.push_str("azimuth");
                name
            }),
            ticks_per_rotation: self
                .ticks_per_rotation
                .ok_or(ConfigError::MissingPart("ticks_per_rotation"))?,
            stick_error: self.stick_error.ok_or(ConfigError::MissingPart("stick_error"))?,
            large_error_threshold: self
                .large_error_threshold
                .ok_or(ConfigError::MissingPart("large_error_threshold"))?,
            small_error_threshold: self
                .small_error_threshold
                .ok_or(ConfigError::MissingPart("small_error_threshold"))?,
            fast_speed: self.fast_speed.ok_or(ConfigError::MissingPart("fast_speed"))?,
            slow_speed: self.slow_speed.ok_or(ConfigError::MissingPart("slow_speed"))?,
            peak_output_forward: self
                .peak_output_forward
                .ok_or(ConfigError::MissingPart("peak_output_forward"))?,
            peak_output_reverse: self
                .peak_output_reverse
                .ok_or(ConfigError::MissingPart("peak_output_reverse"))?,
            invert_direction: self.invert_direction,
            homing_timeout_cycles: self.homing_timeout_cycles,
        };

        AzimuthMotor::new(motor, encoder, proximity, config)
    }
}
