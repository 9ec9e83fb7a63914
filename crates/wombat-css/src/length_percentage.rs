//! `<length-percentage>` values
//!
//! [§ 6.1 Mixing Percentages and Dimensions](https://www.w3.org/TR/css-values-4/#mixed-percentages)
//!
//! "In cases where a `<percentage>` can represent the same quantity as a
//! `<length>`, a `<length-percentage>` type exists."

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calc::CalculatedStyleValue;
use crate::layout_context::LayoutContext;
use crate::values::{Length, Percentage};

/// A length, a percentage of some reference length, or a `calc()` mixing
/// the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPercentage {
    /// A plain `<length>`.
    Length(Length),
    /// A `<percentage>` of the reference length.
    Percentage(Percentage),
    /// A `calc()` expression of type `<length>` or `<percentage>`.
    Calculated(CalculatedStyleValue),
}

impl LengthPercentage {
    /// The concrete length, with percentages taken of `basis`.
    ///
    /// `None` only for a `calc()` expression that is not a length.
    #[must_use]
    pub fn resolved(&self, context: &LayoutContext, basis: Length) -> Option<Length> {
        match self {
            Self::Length(length) => Some(*length),
            Self::Percentage(percentage) => Some(basis.percentage_of(*percentage)),
            Self::Calculated(calculated) => calculated.resolve_length_percentage(context, basis),
        }
    }

    /// [`Self::resolved`] in px.
    #[must_use]
    pub fn to_px(&self, context: &LayoutContext, basis: Length) -> Option<f64> {
        self.resolved(context, basis)
            .map(|length| length.to_px(context))
    }

    /// Whether resolution depends on the basis.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        match self {
            Self::Length(_) => false,
            Self::Percentage(_) => true,
            Self::Calculated(calculated) => calculated.contains_percentage(),
        }
    }
}

impl From<Length> for LengthPercentage {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<Percentage> for LengthPercentage {
    fn from(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl From<CalculatedStyleValue> for LengthPercentage {
    fn from(calculated: CalculatedStyleValue) -> Self {
        Self::Calculated(calculated)
    }
}

impl fmt::Display for LengthPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}"),
            Self::Calculated(calculated) => write!(f, "{calculated}"),
        }
    }
}
