//! Motor module for azimuth-control.
//!
//! Provides the hardware port traits, embedded-hal adapters, the homing
//! sequence and the azimuth motor driver that ties them together.

pub mod adapters;
mod builder;
mod driver;
mod homing;
mod ports;

pub use builder::AzimuthMotorBuilder;
pub use driver::AzimuthMotor;
pub use homing::{HomingAction, HomingRoutine, HomingState};
pub use ports::{EncoderPort, MotorPort, ProximitySensor};
