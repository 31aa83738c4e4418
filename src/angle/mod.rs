//! Angle module for azimuth-control.
//!
//! Turns joystick vectors into absolute headings in encoder ticks.

mod quadrant;
mod resolver;

pub use quadrant::Quadrant;
pub use resolver::{AngleResolver, Heading};
