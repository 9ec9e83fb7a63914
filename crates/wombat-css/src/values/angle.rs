//! CSS Angle values
//!
//! [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use super::{Percentage, ValueParseError, parse_unit, split_dimension};

/// The unit an [`Angle`] was written in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// "Degrees. There are 360 degrees in a full circle."
    Deg,
    /// "Gradians, also known as "gons" or "grades". There are 400 gradians in a full circle."
    Grad,
    /// "Radians. There are 2π radians in a full circle."
    Rad,
    /// "Turns. There is 1 turn in a full circle."
    Turn,
}

/// [§ 7.1 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
///
/// "Angle values are `<dimension>`s denoted by `<angle>`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    /// Create an angle with an explicit unit.
    #[must_use]
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// Create an angle in degrees, the canonical angle unit.
    #[must_use]
    pub const fn make_degrees(degrees: f64) -> Self {
        Self::new(degrees, AngleUnit::Deg)
    }

    /// The magnitude as written, in [`Self::unit`].
    #[must_use]
    pub const fn raw_value(&self) -> f64 {
        self.value
    }

    /// The unit this angle was written in.
    #[must_use]
    pub const fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// [§ 7.1](https://www.w3.org/TR/css-values-4/#angles)
    ///
    /// "The canonical unit for angles is deg."
    #[must_use]
    pub fn to_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Grad => self.value * (360.0 / 400.0),
            AngleUnit::Rad => self.value * (180.0 / PI),
            AngleUnit::Turn => self.value * 360.0,
        }
    }

    /// This angle scaled by the percentage, keeping its unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(self.value * percentage.as_fraction(), self.unit)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Angle {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_dimension(s)?;
        Ok(Self::new(value, parse_unit("angle", unit)?))
    }
}
