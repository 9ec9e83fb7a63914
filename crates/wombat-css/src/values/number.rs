//! CSS numeric values
//!
//! [§ 5 Numeric Data Types](https://www.w3.org/TR/css-values-4/#numeric-types)

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::{ValueParseError, split_dimension};

/// Whether a number was written as an `<integer>` or a general `<number>`.
///
/// Both are stored as `f64`; the distinction only matters for calc() type
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    /// [§ 5.2 Integers](https://www.w3.org/TR/css-values-4/#integers)
    ///
    /// "Integer values are denoted by `<integer>`."
    Integer,
    /// [§ 5.3 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
    ///
    /// "Number values are denoted by `<number>`, and represent real numbers,
    /// possibly with a fractional component."
    Number,
}

/// [§ 5.3 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
///
/// A unitless CSS number, tagged with whether it is an `<integer>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Number {
    kind: NumberType,
    value: f64,
}

impl Number {
    /// Create a `<number>`.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self {
            kind: NumberType::Number,
            value,
        }
    }

    /// Create an `<integer>`.
    #[must_use]
    pub fn integer(value: i32) -> Self {
        Self {
            kind: NumberType::Integer,
            value: f64::from(value),
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Whether this is an `<integer>` or a `<number>`.
    #[must_use]
    pub const fn kind(self) -> NumberType {
        self.kind
    }

    /// Whether this number was written as an `<integer>`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self.kind, NumberType::Integer)
    }

    /// The value rounded to the nearest integer.
    ///
    /// [§ 10.9 Range Checking](https://www.w3.org/TR/css-values-4/#calc-range)
    ///
    /// "Values must be rounded towards the nearest integer if the context
    /// requires an `<integer>`."
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn integer_value(self) -> i64 {
        self.value.round() as i64
    }

    const fn combined_kind(self, other: Self) -> NumberType {
        if self.is_integer() && other.is_integer() {
            NumberType::Integer
        } else {
            NumberType::Number
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            kind: self.combined_kind(other),
            value: self.value + other.value,
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            kind: self.combined_kind(other),
            value: self.value - other.value,
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            kind: self.combined_kind(other),
            value: self.value * other.value,
        }
    }
}

impl Div for Number {
    type Output = Self;

    /// Division never produces an `<integer>`.
    fn div(self, other: Self) -> Self {
        Self::number(self.value / other.value)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            kind: self.kind,
            value: -self.value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Number {
    type Err = ValueParseError;

    /// Text without a fraction or exponent (`"3"`, `"-7"`) is an `<integer>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, rest) = split_dimension(s)?;
        if !rest.is_empty() {
            return Err(ValueParseError::InvalidNumber(s.trim().to_string()));
        }
        let is_integer = !s.contains(['.', 'e', 'E']);
        Ok(Self {
            kind: if is_integer {
                NumberType::Integer
            } else {
                NumberType::Number
            },
            value,
        })
    }
}
