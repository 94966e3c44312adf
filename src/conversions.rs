/// One minute mark on the twelve-unit clock face covers 2.5 degrees
/// (144 marks per full circle).
pub const TWELVE_MINUTE_UNIT_DEGREES: f64 = 2.5;
/// One hour mark on the twelve-unit clock face covers 30 degrees.
pub const TWELVE_HOUR_UNIT_DEGREES: f64 = 30.0;

pub fn normalize_degrees(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}
