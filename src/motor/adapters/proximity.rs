//! Digital proximity input.

use embedded_hal::digital::InputPin;

use crate::error::HardwareError;
use crate::motor::ports::ProximitySensor;

/// Proximity sensor on a single digital input.
///
/// Most inductive proximity switches pull their output low when they see
/// metal, so [`active_low`](Self::active_low) is the usual constructor.
pub struct DigitalProximity<P>
where
    P: InputPin,
{
    pin: P,
    active_low: bool,
}

impl<P> DigitalProximity<P>
where
    P: InputPin,
{
    /// Sensor that asserts by pulling the pin low.
    pub fn active_low(pin: P) -> Self {
        Self { pin, active_low: true }
    }

    /// Sensor that asserts by driving the pin high.
    pub fn active_high(pin: P) -> Self {
        Self { pin, active_low: false }
    }

    /// Release the input pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> ProximitySensor for DigitalProximity<P>
where
    P: InputPin,
{
    type Error = HardwareError;

    fn is_triggered(&mut self) -> Result<bool, Self::Error> {
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        level.map_err(|_| HardwareError::Proximity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_active_low_inverts_level() {
        let expectations = [Transaction::get(State::High), Transaction::get(State::Low)];
        let mut sensor = DigitalProximity::active_low(PinMock::new(&expectations));

        assert!(!sensor.is_triggered().unwrap());
        assert!(sensor.is_triggered().unwrap());

        sensor.release().done();
    }

    #[test]
    fn test_active_high_follows_level() {
        let expectations = [Transaction::get(State::High), Transaction::get(State::Low)];
        let mut sensor = DigitalProximity::active_high(PinMock::new(&expectations));

        assert!(sensor.is_triggered().unwrap());
        assert!(!sensor.is_triggered().unwrap());

        sensor.release().done();
    }
}
