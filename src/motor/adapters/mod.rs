//! embedded-hal 1.0 implementations of the hardware ports.

mod encoder;
mod proximity;
mod pwm;

pub use encoder::QuadratureEncoder;
pub use proximity::DigitalProximity;
pub use pwm::PwmMotor;
