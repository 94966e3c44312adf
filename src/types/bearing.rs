use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Display convention for headings: continuous degrees, or the twelve-unit
/// clock-face notation some vessels use for relative bearing callouts.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Deserialize, Serialize)]
pub enum BearingType {
    #[default]
    Normal,
    Twelve,
}

impl TryFrom<u32> for BearingType {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BearingType::Normal),
            1 => Ok(BearingType::Twelve),
            v => Err(Error::InvalidBearingType(v)),
        }
    }
}

impl FromStr for BearingType {
    type Err = Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val.to_ascii_lowercase().as_str() {
            "normal" => Ok(BearingType::Normal),
            "twelve" => Ok(BearingType::Twelve),
            _ => Err(Error::UnknownBearingType(val.to_owned())),
        }
    }
}
