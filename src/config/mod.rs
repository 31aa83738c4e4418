//! Configuration module for azimuth-control.
//!
//! Provides types for loading and validating azimuth axis configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod azimuth;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use azimuth::AzimuthConfig;
pub use system::SystemConfig;
pub use validation::{validate_axis, validate_config};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Ticks};
