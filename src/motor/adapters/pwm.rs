//! PWM plus direction-pin motor driver.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::error::HardwareError;
use crate::motor::ports::MotorPort;

/// H-bridge style driver: duty cycle sets magnitude, a digital pin sets sign.
///
/// Peak outputs are enforced here as well, since a bare PWM channel has no
/// notion of them.
pub struct PwmMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    pwm: PWM,
    dir_pin: DIR,
    peak_forward: f32,
    peak_reverse: f32,
}

impl<PWM, DIR> PwmMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    /// Create a driver with full output allowed in both directions.
    pub fn new(pwm: PWM, dir_pin: DIR) -> Self {
        Self {
            pwm,
            dir_pin,
            peak_forward: 1.0,
            peak_reverse: -1.0,
        }
    }

    /// Release the PWM channel and direction pin.
    pub fn release(self) -> (PWM, DIR) {
        (self.pwm, self.dir_pin)
    }
}

impl<PWM, DIR> MotorPort for PwmMotor<PWM, DIR>
where
    PWM: SetDutyCycle,
    DIR: OutputPin,
{
    type Error = HardwareError;

    fn set_output(&mut self, percent: f32) -> Result<(), Self::Error> {
        let percent = if percent.is_finite() {
            percent.clamp(self.peak_reverse, self.peak_forward)
        } else {
            0.0
        };

        if percent >= 0.0 {
            self.dir_pin.set_high().map_err(|_| HardwareError::Motor)?;
        } else {
            self.dir_pin.set_low().map_err(|_| HardwareError::Motor)?;
        }

        let max = self.pwm.max_duty_cycle();
        let duty = libm::roundf(percent.abs() * f32::from(max)) as u16;
        self.pwm
            .set_duty_cycle(duty.min(max))
            .map_err(|_| HardwareError::Motor)
    }

    fn configure_peak_output(&mut self, forward: f32, reverse: f32) -> Result<(), Self::Error> {
        self.peak_forward = forward.clamp(0.0, 1.0);
        self.peak_reverse = reverse.clamp(-1.0, 0.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    struct FakePwm {
        duty: u16,
    }

    impl embedded_hal::pwm::ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_forward_and_reverse_output() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut motor = PwmMotor::new(FakePwm { duty: 0 }, PinMock::new(&expectations));

        motor.set_output(0.25).unwrap();
        assert_eq!(motor.pwm.duty, 250);

        motor.set_output(-0.5).unwrap();
        assert_eq!(motor.pwm.duty, 500);

        let (_, mut dir) = motor.release();
        dir.done();
    }

    #[test]
    fn test_peak_output_clamps() {
        let expectations = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut motor = PwmMotor::new(FakePwm { duty: 0 }, PinMock::new(&expectations));
        motor.configure_peak_output(0.6, -0.3).unwrap();

        motor.set_output(1.0).unwrap();
        assert_eq!(motor.pwm.duty, 600);

        motor.set_output(-1.0).unwrap();
        assert_eq!(motor.pwm.duty, 300);

        let (_, mut dir) = motor.release();
        dir.done();
    }

    #[test]
    fn test_non_finite_output_is_zero() {
        let expectations = [Transaction::set(State::High)];
        let mut motor = PwmMotor::new(FakePwm { duty: 77 }, PinMock::new(&expectations));

        motor.set_output(f32::NAN).unwrap();
        assert_eq!(motor.pwm.duty, 0);

        let (_, mut dir) = motor.release();
        dir.done();
    }
}
