//! CSS Time values
//!
//! [§ 7.2 Duration Units](https://www.w3.org/TR/css-values-4/#time)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use super::{Percentage, ValueParseError, parse_unit, split_dimension};

/// The unit a [`Time`] was written in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// "Seconds."
    S,
    /// "Milliseconds. There are 1000 milliseconds in a second."
    Ms,
}

/// [§ 7.2 Duration Units](https://www.w3.org/TR/css-values-4/#time)
///
/// "Time values are dimensions denoted by `<time>`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Time {
    value: f64,
    unit: TimeUnit,
}

impl Time {
    /// Create a time with an explicit unit.
    #[must_use]
    pub const fn new(value: f64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Create a time in seconds, the canonical duration unit.
    #[must_use]
    pub const fn make_seconds(seconds: f64) -> Self {
        Self::new(seconds, TimeUnit::S)
    }

    /// The magnitude as written, in [`Self::unit`].
    #[must_use]
    pub const fn raw_value(&self) -> f64 {
        self.value
    }

    /// The unit this time was written in.
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// "The canonical unit for durations is seconds."
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        match self.unit {
            TimeUnit::S => self.value,
            TimeUnit::Ms => self.value / 1000.0,
        }
    }

    /// This time scaled by the percentage, keeping its unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(self.value * percentage.as_fraction(), self.unit)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Time {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_dimension(s)?;
        Ok(Self::new(value, parse_unit("time", unit)?))
    }
}
