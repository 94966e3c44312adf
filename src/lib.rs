//! Heading display helpers for simulation UIs.
//!
//! Converts a numeric heading or aircraft-relative angle into the string a
//! bridge/radar screen shows, in one of two conventions: continuous degrees
//! or twelve-unit clock-face notation ("hour:minute" relative bearings).

pub mod conversions;
pub mod display;
pub mod errors;
pub mod types;
