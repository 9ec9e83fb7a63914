//! CSS Percentage values
//!
//! [§ 5.5 Percentages](https://www.w3.org/TR/css-values-4/#percentages)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ValueParseError, split_dimension};

/// [§ 5.5 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "A `<percentage>` value is denoted by `<percentage>`, and consists of a
/// `<number>` immediately followed by a percent sign '%'. Percentage values
/// are always relative to another quantity, for example a length."
///
/// The reference quantity is supplied at resolution time; see
/// `percentage_of` on [`super::Length`], [`super::Angle`], [`super::Time`]
/// and [`super::Frequency`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentage {
    value: f64,
}

impl Percentage {
    /// Create a new percentage value (e.g. `50.0` for 50%).
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Get the raw percentage value (e.g., 50.0 for 50%).
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// The percentage as a fraction of one (e.g. 0.5 for 50%).
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        self.value / 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value)
    }
}

impl FromStr for Percentage {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_dimension(s)?;
        if unit != "%" {
            return Err(ValueParseError::UnknownUnit {
                kind: "percentage",
                unit: unit.to_string(),
            });
        }
        Ok(Self::new(value))
    }
}
