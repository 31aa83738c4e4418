//! # azimuth-control
//!
//! Closed-loop azimuth positioning for turrets and swerve modules with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Stick to heading**: Joystick vectors resolve to absolute encoder targets
//! - **Shortest arc**: Travel always takes the shorter way across the wraparound seam
//! - **Tiered control**: Fast / slow / stop bands with no overshoot hunting
//! - **Non-blocking homing**: Proximity-sensor homing polled once per control cycle
//! - **Fail closed**: Any fault commands zero output before it is reported
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use azimuth_control::{AzimuthMotor, SystemConfig};
//! use azimuth_control::motor::adapters::{DigitalProximity, PwmMotor, QuadratureEncoder};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = azimuth_control::load_config("swerve.toml")?;
//!
//! // Create the axis with embedded-hal peripherals
//! let mut azimuth = AzimuthMotor::builder()
//!     .from_config(&config, "front_left")?
//!     .motor(PwmMotor::new(pwm, dir_pin))
//!     .encoder(QuadratureEncoder::new(enc_a, enc_b)?)
//!     .proximity(DigitalProximity::active_low(prox_pin))
//!     .build()?;
//!
//! azimuth.begin_homing()?;
//! loop {
//!     if azimuth.homing_state() == HomingState::Zeroed {
//!         azimuth.point_to_target(stick.x, stick.y)?;
//!     } else {
//!         azimuth.homing_step()?;
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod angle;
pub mod config;
pub mod control;
pub mod error;
pub mod motor;

// Re-exports for ergonomic API
pub use angle::{AngleResolver, Heading, Quadrant};
pub use config::{validate_config, AzimuthConfig, SystemConfig};
pub use control::{ControlCommand, Direction, MotionController, PositionTracker, SpeedTier};
pub use error::{Error, Result};
pub use motor::{AzimuthMotor, AzimuthMotorBuilder, HomingState};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Ticks};
