//! Control module for azimuth-control.
//!
//! Provides circular position tracking and the per-cycle tiered controller.

mod command;
mod controller;
mod tracker;

pub use command::{ControlCommand, Direction, SpeedTier};
pub use controller::MotionController;
pub use tracker::PositionTracker;
