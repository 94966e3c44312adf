//! Heading/angle string formatting for screen rendering.

use crate::conversions::{TWELVE_HOUR_UNIT_DEGREES, TWELVE_MINUTE_UNIT_DEGREES};
use crate::types::{bearing::BearingType, heading::Heading};

/// Formats an aircraft-relative angle, where 0 points along the ship's
/// starboard axis. Shifts by 90 degrees so that 0 reads as dead ahead.
pub fn show_angle(angle: f64, bearing_type: BearingType, short: bool) -> String {
    show_heading(angle + 90.0, bearing_type, short)
}

/// Formats a heading according to the given display convention.
///
/// `Normal` renders degrees in [0, 360), rounded to the nearest integer when
/// `short` or with one fractional digit otherwise. `Twelve` renders
/// "hour:minute" clock-face notation, with the hour always a truncated
/// integer in [0, 11] and the minute formatted like the `Normal` value.
pub fn show_heading(heading: f64, bearing_type: BearingType, short: bool) -> String {
    let heading = Heading::from(heading);
    match bearing_type {
        BearingType::Normal => {
            let degrees = heading.get();
            if short {
                format!("{}", degrees.round() as i32)
            } else {
                format!("{degrees:.1}")
            }
        }
        BearingType::Twelve => {
            let hour = (heading.get() / TWELVE_HOUR_UNIT_DEGREES).rem_euclid(12.0) as i32;
            let minute = (heading.get() / TWELVE_MINUTE_UNIT_DEGREES).rem_euclid(12.0);
            if short {
                format!("{hour}:{}", minute.round() as i32)
            } else {
                format!("{hour}:{minute:.1}")
            }
        }
    }
}
