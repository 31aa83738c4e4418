//! Azimuth motor driver.
//!
//! Generic over the three hardware ports. Every operation does a bounded
//! amount of work and returns, so the driver can be called from a fixed-rate
//! control loop.

use crate::angle::{AngleResolver, Heading};
use crate::config::{validate_axis, AzimuthConfig, Degrees, Ticks};
use crate::control::{ControlCommand, MotionController};
use crate::error::{Error, HardwareError, HomingError, Result};

use super::builder::AzimuthMotorBuilder;
use super::homing::{HomingAction, HomingRoutine, HomingState};
use super::ports::{EncoderPort, MotorPort, ProximitySensor};

/// Closed-loop azimuth positioning for one axis.
///
/// Generic over:
/// - `M`: motor driver (must implement [`MotorPort`])
/// - `E`: encoder (must implement [`EncoderPort`])
/// - `P`: home proximity sensor (must implement [`ProximitySensor`])
///
/// Faults never leave the motor running: the output is forced to zero before
/// the error is returned, and the next call proceeds normally.
pub struct AzimuthMotor<M, E, P>
where
    M: MotorPort,
    E: EncoderPort,
    P: ProximitySensor,
{
    /// Motor driver.
    motor: M,

    /// Relative encoder; its zero is the calibration reference.
    encoder: E,

    /// Home sensor.
    proximity: P,

    /// Axis configuration, validated at construction.
    config: AzimuthConfig,

    resolver: AngleResolver,
    controller: MotionController,
    homing: HomingRoutine,
}

impl<M, E, P> AzimuthMotor<M, E, P>
where
    M: MotorPort,
    E: EncoderPort,
    P: ProximitySensor,
{
    /// Start building a motor.
    pub fn builder() -> AzimuthMotorBuilder<M, E, P> {
        AzimuthMotorBuilder::new()
    }

    /// Validate the configuration and apply the peak outputs to the motor.
    pub(crate) fn new(mut motor: M, encoder: E, proximity: P, config: AzimuthConfig) -> Result<Self> {
        validate_axis(&config)?;

        motor
            .configure_peak_output(config.peak_output_forward, config.peak_output_reverse)
            .map_err(|_| HardwareError::Motor)?;

        Ok(Self {
            motor,
            encoder,
            proximity,
            resolver: AngleResolver::from_config(&config),
            controller: MotionController::from_config(&config),
            homing: HomingRoutine::new(config.homing_timeout_cycles),
            config,
        })
    }

    /// Get the axis name.
    #[inline]
    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    /// Get the axis configuration.
    #[inline]
    pub fn config(&self) -> &AzimuthConfig {
        &self.config
    }

    /// Get the motion controller.
    #[inline]
    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    /// Get the homing state.
    #[inline]
    pub fn homing_state(&self) -> HomingState {
        self.homing.state()
    }

    /// Point the axis along a joystick vector for this cycle.
    ///
    /// Returns the command that was applied.
    pub fn point_to_target(&mut self, x: f32, y: f32) -> Result<ControlCommand> {
        let result = self
            .resolver
            .resolve(x, y)
            .map_err(Error::from)
            .and_then(|Heading { target, .. }| self.track(target));
        self.fail_closed(result)
    }

    /// Drive toward an absolute tick position for this cycle.
    ///
    /// `target` may lie outside one rotation; it is reduced first.
    pub fn drive_to_ticks(&mut self, target: Ticks) -> Result<ControlCommand> {
        let result = self.track(target);
        self.fail_closed(result)
    }

    /// Drive toward an absolute heading in degrees for this cycle.
    pub fn drive_to_degrees(&mut self, target: Degrees) -> Result<ControlCommand> {
        self.drive_to_ticks(Ticks::from_degrees(target, self.config.ticks_per_rotation))
    }

    /// Zero the encoder if the axis is sitting at the proximity sensor.
    ///
    /// Returns whether the encoder was zeroed.
    pub fn zero_if_at_proximity(&mut self) -> Result<bool> {
        let result = self.try_zero_if_at_proximity();
        self.fail_closed(result)
    }

    /// Make the current position the reference heading.
    pub fn zero(&mut self) -> Result<()> {
        let result = self.reset_encoder();
        self.fail_closed(result)
    }

    /// Start a homing sequence; drive it with [`homing_step`](Self::homing_step).
    ///
    /// The search direction is fixed here from the sign of the raw count.
    pub fn begin_homing(&mut self) -> Result<()> {
        let raw = self.raw_count();
        let result = raw.map(|raw| self.homing.begin(raw));
        self.fail_closed(result)
    }

    /// Advance the homing sequence by one cycle.
    ///
    /// Once the sensor asserts the encoder is reset and the axis parks at
    /// position 0 on every later call.
    ///
    /// # Errors
    ///
    /// `HomingError::NotHoming` if no sequence was started,
    /// `HomingError::Stalled` if the sensor was not reached in time.
    pub fn homing_step(&mut self) -> Result<HomingState> {
        let result = self.try_homing_step();
        self.fail_closed(result)
    }

    /// Current position reduced into one rotation.
    pub fn current_position(&mut self) -> Result<Ticks> {
        let raw = self.raw_count()?;
        Ok(self.controller.tracker().normalize(raw))
    }

    /// Current position in degrees, in `[0, 360)`.
    pub fn current_degrees(&mut self) -> Result<Degrees> {
        let position = self.current_position()?;
        Ok(position.to_degrees(self.config.ticks_per_rotation))
    }

    /// Unreduced encoder count.
    pub fn raw_count(&mut self) -> Result<i64> {
        self.encoder
            .read_raw_count()
            .map_err(|_| HardwareError::Encoder.into())
    }

    /// Whether the proximity sensor is asserted.
    pub fn is_at_proximity(&mut self) -> Result<bool> {
        self.proximity
            .is_triggered()
            .map_err(|_| HardwareError::Proximity.into())
    }

    /// Command zero output and abandon any homing sequence.
    pub fn stop(&mut self) -> Result<()> {
        self.homing.cancel();
        self.apply_output(0.0)
    }

    /// Release the hardware ports.
    pub fn release(self) -> (M, E, P) {
        (self.motor, self.encoder, self.proximity)
    }

    fn try_zero_if_at_proximity(&mut self) -> Result<bool> {
        if self.is_at_proximity()? {
            self.reset_encoder()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn reset_encoder(&mut self) -> Result<()> {
        self.encoder
            .reset()
            .map_err(|_| Error::from(HardwareError::Encoder))?;
        info!("azimuth: encoder zeroed");
        Ok(())
    }

    fn track(&mut self, target: Ticks) -> Result<ControlCommand> {
        let current = self.current_position()?;
        let command = self.controller.step(current, target);
        trace!(
            "azimuth: current {} target {} -> {}",
            current.value(),
            target.value(),
            command
        );
        self.apply_output(self.controller.output(command))?;
        Ok(command)
    }

    fn try_homing_step(&mut self) -> Result<HomingState> {
        if self.homing.state() == HomingState::Idle {
            return Err(HomingError::NotHoming.into());
        }

        let at_proximity = if self.homing.is_active() {
            self.is_at_proximity()?
        } else {
            false
        };

        match self.homing.poll(at_proximity) {
            HomingAction::Drive(direction) => {
                self.apply_output(direction.sign() * self.config.fast_speed)?;
            }
            HomingAction::Zero => {
                self.reset_encoder()?;
                self.homing.complete();
                self.track(Ticks::ZERO)?;
            }
            HomingAction::Hold => {
                self.track(Ticks::ZERO)?;
            }
            HomingAction::Stop => {
                self.apply_output(0.0)?;
                if let HomingState::Stalled { cycles } = self.homing.state() {
                    return Err(HomingError::Stalled { cycles }.into());
                }
            }
        }

        Ok(self.homing.state())
    }

    fn apply_output(&mut self, percent: f32) -> Result<()> {
        let percent = if self.config.invert_direction {
            -percent
        } else {
            percent
        };
        let percent = percent.clamp(self.config.peak_output_reverse, self.config.peak_output_forward);
        self.motor
            .set_output(percent)
            .map_err(|_| HardwareError::Motor.into())
    }

    fn fail_closed<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            warn!("azimuth: fault, output forced to zero");
            let _ = self.motor.set_output(0.0);
        }
        result
    }
}
