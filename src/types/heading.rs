use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::conversions::normalize_degrees;

/// A direction in degrees, kept normalized to [0, 360).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Heading(f64);

impl From<f64> for Heading {
    fn from(value: f64) -> Self {
        Heading(normalize_degrees(value))
    }
}

// Considers a heading equal to a raw degree value if they're within
// 0.1 degrees, for test comparisons
impl PartialEq<f64> for Heading {
    fn eq(&self, other: &f64) -> bool {
        (self.0 - other).abs() < 0.1
    }
}

impl Add<f64> for Heading {
    type Output = Heading;

    fn add(self, rhs: f64) -> Self::Output {
        Heading(normalize_degrees(self.0 + rhs))
    }
}

impl Heading {
    pub fn new(val: f64) -> Self {
        Heading(normalize_degrees(val))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_into_circle() {
        assert_eq!(Heading::new(-10.0), 350.0);
        assert_eq!(Heading::new(370.0), 10.0);
        assert_eq!(Heading::new(-400.0), 320.0);
        assert_eq!(Heading::new(720.0), 0.0);
    }

    #[test]
    fn add_wraps_around() {
        assert_eq!(Heading::new(350.0) + 20.0, 10.0);
        assert_eq!(Heading::new(0.0) + 90.0, 90.0);
    }
}
