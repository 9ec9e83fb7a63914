//! CSS Frequency values
//!
//! [§ 7.3 Frequency Units](https://www.w3.org/TR/css-values-4/#frequency)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use super::{Percentage, ValueParseError, parse_unit, split_dimension};

/// The unit a [`Frequency`] was written in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyUnit {
    /// "Hertz. It represents the number of occurrences per second."
    Hz,
    /// "KiloHertz. A kiloHertz is 1000 Hertz."
    Khz,
}

/// [§ 7.3 Frequency Units](https://www.w3.org/TR/css-values-4/#frequency)
///
/// "Frequency values are dimensions denoted by `<frequency>`."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency {
    value: f64,
    unit: FrequencyUnit,
}

impl Frequency {
    /// Create a frequency with an explicit unit.
    #[must_use]
    pub const fn new(value: f64, unit: FrequencyUnit) -> Self {
        Self { value, unit }
    }

    /// Create a frequency in hertz, the canonical frequency unit.
    #[must_use]
    pub const fn make_hertz(hertz: f64) -> Self {
        Self::new(hertz, FrequencyUnit::Hz)
    }

    /// The magnitude as written, in [`Self::unit`].
    #[must_use]
    pub const fn raw_value(&self) -> f64 {
        self.value
    }

    /// The unit this frequency was written in.
    #[must_use]
    pub const fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// "The canonical unit for frequencies is hertz."
    #[must_use]
    pub fn to_hertz(&self) -> f64 {
        match self.unit {
            FrequencyUnit::Hz => self.value,
            FrequencyUnit::Khz => self.value * 1000.0,
        }
    }

    /// This frequency scaled by the percentage, keeping its unit.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        Self::new(self.value * percentage.as_fraction(), self.unit)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Frequency {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_dimension(s)?;
        Ok(Self::new(value, parse_unit("frequency", unit)?))
    }
}
