//! Hardware ports consumed by the azimuth controller.
//!
//! Implement these for a motor controller, an encoder and a proximity input,
//! or use the embedded-hal adapters in [`crate::motor::adapters`].

/// Percent-output motor driver.
pub trait MotorPort {
    /// Error type for motor operations.
    type Error;

    /// Apply a percent output in `[-1, 1]`.
    fn set_output(&mut self, percent: f32) -> Result<(), Self::Error>;

    /// Limit the output in each direction (`forward >= 0`, `reverse <= 0`).
    fn configure_peak_output(&mut self, forward: f32, reverse: f32) -> Result<(), Self::Error>;
}

/// Relative quadrature encoder.
pub trait EncoderPort {
    /// Error type for encoder operations.
    type Error;

    /// Read the accumulated count since the last reset.
    fn read_raw_count(&mut self) -> Result<i64, Self::Error>;

    /// Make the current position count zero.
    fn reset(&mut self) -> Result<(), Self::Error>;
}

/// Proximity sensor marking the home position.
pub trait ProximitySensor {
    /// Error type for sensor reads.
    type Error;

    /// Whether the sensor currently sees its target (logical, not electrical, level).
    fn is_triggered(&mut self) -> Result<bool, Self::Error>;
}

impl<T: MotorPort + ?Sized> MotorPort for &mut T {
    type Error = T::Error;

    #[inline]
    fn set_output(&mut self, percent: f32) -> Result<(), Self::Error> {
        T::set_output(self, percent)
    }

    #[inline]
    fn configure_peak_output(&mut self, forward: f32, reverse: f32) -> Result<(), Self::Error> {
        T::configure_peak_output(self, forward, reverse)
    }
}

impl<T: EncoderPort + ?Sized> EncoderPort for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_raw_count(&mut self) -> Result<i64, Self::Error> {
        T::read_raw_count(self)
    }

    #[inline]
    fn reset(&mut self) -> Result<(), Self::Error> {
        T::reset(self)
    }
}

impl<T: ProximitySensor + ?Sized> ProximitySensor for &mut T {
    type Error = T::Error;

    #[inline]
    fn is_triggered(&mut self) -> Result<bool, Self::Error> {
        T::is_triggered(self)
    }
}
