//! Error types for azimuth-control.
//!
//! Provides unified error handling across configuration, control, homing and hardware ports.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all azimuth-control operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Input or controller logic fault
    Control(ControlError),
    /// Homing routine fault
    Homing(HomingError),
    /// Hardware port failure
    Hardware(HardwareError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Axis name not found in configuration
    AxisNotFound(heapless::String<32>),
    /// A required builder part was not supplied
    MissingPart(&'static str),
    /// Ticks per rotation must be positive and divisible by 4
    InvalidTicksPerRotation(u32),
    /// Stick deadband must be in [0, 1)
    InvalidStickError(f32),
    /// Error thresholds must satisfy 0 <= small < large
    InvalidThresholds {
        /// Small (stop) threshold in ticks
        small: u32,
        /// Large (fast) threshold in ticks
        large: u32,
    },
    /// Speeds must satisfy 0 < slow <= fast <= 1
    InvalidSpeeds {
        /// Fast speed
        fast: f32,
        /// Slow speed
        slow: f32,
    },
    /// Peak outputs must satisfy -1 <= reverse <= 0 <= forward <= 1
    InvalidPeakOutput {
        /// Forward peak output
        forward: f32,
        /// Reverse peak output
        reverse: f32,
    },
    /// Homing timeout must be at least one cycle
    InvalidHomingTimeout,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Input and controller logic faults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlError {
    /// Stick vector could not be classified (non-finite, or off-axis without a quadrant)
    InvalidInput {
        /// Stick x value
        x: f32,
        /// Stick y value
        y: f32,
    },
    /// Quadrant label outside 1..=4
    QuadrantOutOfRange(u8),
}

/// Homing routine faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomingError {
    /// Proximity sensor never asserted within the configured cycle bound
    Stalled {
        /// Cycles spent searching
        cycles: u32,
    },
    /// Homing step requested without a running homing sequence
    NotHoming,
}

/// Hardware port failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// Motor port rejected a command
    Motor,
    /// Encoder port failed to read or reset
    Encoder,
    /// Proximity sensor could not be read
    Proximity,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Control(e) => write!(f, "Control error: {}", e),
            Error::Homing(e) => write!(f, "Homing error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::AxisNotFound(name) => write!(f, "Axis '{}' not found", name),
            ConfigError::MissingPart(part) => write!(f, "{} is required", part),
            ConfigError::InvalidTicksPerRotation(v) => {
                write!(f, "Invalid ticks per rotation: {}. Must be > 0 and divisible by 4", v)
            }
            ConfigError::InvalidStickError(v) => write!(f, "Invalid stick error: {}. Must be in [0, 1)", v),
            ConfigError::InvalidThresholds { small, large } => {
                write!(f, "Invalid error thresholds: small ({}) must be < large ({})", small, large)
            }
            ConfigError::InvalidSpeeds { fast, slow } => {
                write!(f, "Invalid speeds: need 0 < slow ({}) <= fast ({}) <= 1", slow, fast)
            }
            ConfigError::InvalidPeakOutput { forward, reverse } => {
                write!(f, "Invalid peak output: forward {} must be in [0, 1], reverse {} in [-1, 0]", forward, reverse)
            }
            ConfigError::InvalidHomingTimeout => write!(f, "Homing timeout must be at least 1 cycle"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::InvalidInput { x, y } => {
                write!(f, "Stick input ({}, {}) cannot be resolved to a heading", x, y)
            }
            ControlError::QuadrantOutOfRange(q) => write!(f, "Quadrant {} is outside 1..=4", q),
        }
    }
}

impl fmt::Display for HomingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomingError::Stalled { cycles } => {
                write!(f, "Proximity sensor not reached after {} cycles", cycles)
            }
            HomingError::NotHoming => write!(f, "No homing sequence in progress"),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::Motor => write!(f, "Motor port operation failed"),
            HardwareError::Encoder => write!(f, "Encoder port operation failed"),
            HardwareError::Proximity => write!(f, "Proximity sensor read failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ControlError> for Error {
    fn from(e: ControlError) -> Self {
        Error::Control(e)
    }
}

impl From<HomingError> for Error {
    fn from(e: HomingError) -> Self {
        Error::Homing(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ControlError {}

#[cfg(feature = "std")]
impl std::error::Error for HomingError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
