//! `<angle-percentage>` values
//!
//! [§ 6.1 Mixing Percentages and Dimensions](https://www.w3.org/TR/css-values-4/#mixed-percentages)
//!
//! "`<angle-percentage>` represents a value that can be either an `<angle>`
//! or a `<percentage>`."

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calc::CalculatedStyleValue;
use crate::values::{Angle, Percentage};

/// An angle, a percentage of some reference angle, or a `calc()` mixing the
/// two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnglePercentage {
    /// A plain `<angle>`.
    Angle(Angle),
    /// A `<percentage>` of the reference angle.
    Percentage(Percentage),
    /// A `calc()` expression of type `<angle>` or `<percentage>`.
    Calculated(CalculatedStyleValue),
}

impl AnglePercentage {
    /// The concrete angle, with percentages taken of `basis`.
    ///
    /// `None` only for a `calc()` expression that is not an angle.
    #[must_use]
    pub fn resolved(&self, basis: Angle) -> Option<Angle> {
        match self {
            Self::Angle(angle) => Some(*angle),
            Self::Percentage(percentage) => Some(basis.percentage_of(*percentage)),
            Self::Calculated(calculated) => calculated.resolve_angle_percentage(basis),
        }
    }

    /// [`Self::resolved`] in degrees.
    #[must_use]
    pub fn to_degrees(&self, basis: Angle) -> Option<f64> {
        self.resolved(basis).map(|angle| angle.to_degrees())
    }

    /// Whether resolution depends on the basis.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        match self {
            Self::Angle(_) => false,
            Self::Percentage(_) => true,
            Self::Calculated(calculated) => calculated.contains_percentage(),
        }
    }
}

impl From<Angle> for AnglePercentage {
    fn from(angle: Angle) -> Self {
        Self::Angle(angle)
    }
}

impl From<Percentage> for AnglePercentage {
    fn from(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl From<CalculatedStyleValue> for AnglePercentage {
    fn from(calculated: CalculatedStyleValue) -> Self {
        Self::Calculated(calculated)
    }
}

impl fmt::Display for AnglePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(angle) => write!(f, "{angle}"),
            Self::Percentage(percentage) => write!(f, "{percentage}"),
            Self::Calculated(calculated) => write!(f, "{calculated}"),
        }
    }
}
