//! The value a calc() subexpression evaluates to.
//!
//! [§ 10.7 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::expression::SumOperation;
use crate::layout_context::LayoutContext;
use crate::values::{
    Angle, Frequency, Length, Number, Percentage, Time, ValueParseError, split_dimension,
};

/// The dimension a bare percentage resolves against.
///
/// [§ 10.7](https://www.w3.org/TR/css-values-4/#calc-type-checking)
///
/// "If percentages are accepted in the context in which the expression is
/// placed, a `<percentage-token>` obtains the type determined by the
/// percentage's reference quantity." The property being resolved decides
/// that quantity, e.g. the containing block width for `width`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PercentageBasis {
    /// Percentages are not resolved against anything.
    #[default]
    None,
    /// Percentages are relative to an angle.
    Angle(Angle),
    /// Percentages are relative to a frequency.
    Frequency(Frequency),
    /// Percentages are relative to a length.
    Length(Length),
    /// Percentages are relative to a time.
    Time(Time),
}

impl From<Angle> for PercentageBasis {
    fn from(angle: Angle) -> Self {
        Self::Angle(angle)
    }
}

impl From<Frequency> for PercentageBasis {
    fn from(frequency: Frequency) -> Self {
        Self::Frequency(frequency)
    }
}

impl From<Length> for PercentageBasis {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

impl From<Time> for PercentageBasis {
    fn from(time: Time) -> Self {
        Self::Time(time)
    }
}

impl FromStr for PercentageBasis {
    type Err = ValueParseError;

    /// Reads a dimension (`200px`, `90deg`, `2s`, `1khz`) and picks the
    /// basis by its unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(length) = s.parse::<Length>() {
            return Ok(Self::Length(length));
        }
        if let Ok(angle) = s.parse::<Angle>() {
            return Ok(Self::Angle(angle));
        }
        if let Ok(time) = s.parse::<Time>() {
            return Ok(Self::Time(time));
        }
        if let Ok(frequency) = s.parse::<Frequency>() {
            return Ok(Self::Frequency(frequency));
        }
        let (_, unit) = split_dimension(s)?;
        Err(ValueParseError::UnknownUnit {
            kind: "percentage basis",
            unit: unit.to_string(),
        })
    }
}

/// [§ 10.7 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
///
/// The accumulated value of a calc() subexpression. Exactly one unit type is
/// active; dimension results are kept in their canonical unit (px, deg, s,
/// Hz) once any arithmetic has touched them.
///
/// A `Percentage` result is basis-pending: it only becomes a dimension when
/// it meets a dimension operand and a [`PercentageBasis`] of that dimension.
///
/// Arithmetic assumes the expression already passed type resolution. The
/// combinations that resolution rejects are programmer errors here and
/// panic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalculationResult {
    /// A `<number>` or `<integer>`.
    Number(Number),
    /// An `<angle>`.
    Angle(Angle),
    /// A `<frequency>`.
    Frequency(Frequency),
    /// A `<length>`.
    Length(Length),
    /// A `<percentage>` not yet resolved against a basis.
    Percentage(Percentage),
    /// A `<time>`.
    Time(Time),
}

impl CalculationResult {
    /// `self + other`.
    ///
    /// # Panics
    ///
    /// Panics if the operands have incompatible types, if a length is
    /// involved and `context` is `None`, or if a percentage meets a
    /// dimension while `basis` holds no dimension of that type.
    #[must_use]
    pub fn add(
        self,
        other: Self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> Self {
        self.add_or_subtract(SumOperation::Add, other, context, basis)
    }

    /// `self - other`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Self::add`].
    #[must_use]
    pub fn subtract(
        self,
        other: Self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> Self {
        self.add_or_subtract(SumOperation::Subtract, other, context, basis)
    }

    /// Dispatch [`Self::add`] or [`Self::subtract`] by operator.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Self::add`].
    #[must_use]
    pub fn add_or_subtract(
        self,
        op: SumOperation,
        other: Self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> Self {
        let sign = match op {
            SumOperation::Add => 1.0,
            SumOperation::Subtract => -1.0,
        };

        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => Self::Number(match op {
                SumOperation::Add => lhs + rhs,
                SumOperation::Subtract => lhs - rhs,
            }),

            (Self::Percentage(lhs), Self::Percentage(rhs)) => {
                Self::Percentage(Percentage::new(lhs.value() + sign * rhs.value()))
            }

            // Percentage on the left: swap the operands so only the
            // dimension-on-the-left case has to know about the basis.
            // 'A - B' becomes '-B + A'.
            (Self::Percentage(_), _) => {
                let rhs = match op {
                    SumOperation::Add => other,
                    SumOperation::Subtract => {
                        other.multiply_by(Self::Number(Number::integer(-1)), context)
                    }
                };
                rhs.add(self, context, basis)
            }

            (Self::Angle(lhs), _) => {
                let rhs = match other {
                    Self::Angle(angle) => angle,
                    Self::Percentage(percentage) => match basis {
                        PercentageBasis::Angle(reference) => reference.percentage_of(percentage),
                        _ => missing_basis("<angle>", basis),
                    },
                    _ => mismatched(op, self, other),
                };
                Self::Angle(Angle::make_degrees(
                    lhs.to_degrees() + sign * rhs.to_degrees(),
                ))
            }

            (Self::Frequency(lhs), _) => {
                let rhs = match other {
                    Self::Frequency(frequency) => frequency,
                    Self::Percentage(percentage) => match basis {
                        PercentageBasis::Frequency(reference) => {
                            reference.percentage_of(percentage)
                        }
                        _ => missing_basis("<frequency>", basis),
                    },
                    _ => mismatched(op, self, other),
                };
                Self::Frequency(Frequency::make_hertz(
                    lhs.to_hertz() + sign * rhs.to_hertz(),
                ))
            }

            (Self::Length(lhs), _) => {
                let rhs = match other {
                    Self::Length(length) => length,
                    Self::Percentage(percentage) => match basis {
                        PercentageBasis::Length(reference) => reference.percentage_of(percentage),
                        _ => missing_basis("<length>", basis),
                    },
                    _ => mismatched(op, self, other),
                };
                Self::Length(Length::make_px(
                    length_to_px(lhs, context) + sign * length_to_px(rhs, context),
                ))
            }

            (Self::Time(lhs), _) => {
                let rhs = match other {
                    Self::Time(time) => time,
                    Self::Percentage(percentage) => match basis {
                        PercentageBasis::Time(reference) => reference.percentage_of(percentage),
                        _ => missing_basis("<time>", basis),
                    },
                    _ => mismatched(op, self, other),
                };
                Self::Time(Time::make_seconds(
                    lhs.to_seconds() + sign * rhs.to_seconds(),
                ))
            }

            (Self::Number(_), _) => mismatched(op, self, other),
        }
    }

    /// `self * other`. At least one side must be a number.
    ///
    /// # Panics
    ///
    /// Panics if neither side is a number, or if a length is involved and
    /// `context` is `None`.
    #[must_use]
    pub fn multiply_by(self, other: Self, context: Option<&LayoutContext>) -> Self {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => Self::Number(lhs * rhs),
            // Multiplication commutes, so the number can move to the right.
            (Self::Number(_), _) => other.multiply_by(self, context),
            (_, Self::Number(factor)) => {
                self.map_magnitude(|magnitude| magnitude * factor.value(), context)
            }
            _ => panic!("calc() cannot multiply {self} by {other}: neither side is a <number>"),
        }
    }

    /// `self / other`. The divisor must be a non-zero number.
    ///
    /// Dividing a number always yields a `<number>`, never an `<integer>`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is not a number, if it is zero, or if a length is
    /// involved and `context` is `None`. Expressions validated by
    /// [`super::CalculatedStyleValue::new`] never divide by zero.
    #[must_use]
    pub fn divide_by(self, other: Self, context: Option<&LayoutContext>) -> Self {
        let Self::Number(divisor) = other else {
            panic!("calc() cannot divide {self} by {other}: the divisor is not a <number>");
        };
        let denominator = checked_denominator(divisor.value());
        match self {
            Self::Number(number) => Self::Number(number / divisor),
            _ => self.map_magnitude(|magnitude| magnitude / denominator, context),
        }
    }

    /// Apply `f` to the magnitude in the canonical unit.
    fn map_magnitude(self, f: impl Fn(f64) -> f64, context: Option<&LayoutContext>) -> Self {
        match self {
            Self::Number(number) => Self::Number(Number::number(f(number.value()))),
            Self::Angle(angle) => Self::Angle(Angle::make_degrees(f(angle.to_degrees()))),
            Self::Frequency(frequency) => {
                Self::Frequency(Frequency::make_hertz(f(frequency.to_hertz())))
            }
            Self::Length(length) => Self::Length(Length::make_px(f(length_to_px(length, context)))),
            Self::Percentage(percentage) => {
                Self::Percentage(Percentage::new(f(percentage.value())))
            }
            Self::Time(time) => Self::Time(Time::make_seconds(f(time.to_seconds()))),
        }
    }

    /// The number, if this result is one.
    #[must_use]
    pub const fn number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// The angle, if this result is one.
    #[must_use]
    pub const fn angle(&self) -> Option<Angle> {
        match self {
            Self::Angle(angle) => Some(*angle),
            _ => None,
        }
    }

    /// The frequency, if this result is one.
    #[must_use]
    pub const fn frequency(&self) -> Option<Frequency> {
        match self {
            Self::Frequency(frequency) => Some(*frequency),
            _ => None,
        }
    }

    /// The length, if this result is one.
    #[must_use]
    pub const fn length(&self) -> Option<Length> {
        match self {
            Self::Length(length) => Some(*length),
            _ => None,
        }
    }

    /// The percentage, if this result is still basis-pending.
    #[must_use]
    pub const fn percentage(&self) -> Option<Percentage> {
        match self {
            Self::Percentage(percentage) => Some(*percentage),
            _ => None,
        }
    }

    /// The time, if this result is one.
    #[must_use]
    pub const fn time(&self) -> Option<Time> {
        match self {
            Self::Time(time) => Some(*time),
            _ => None,
        }
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => fmt::Display::fmt(number, f),
            Self::Angle(angle) => fmt::Display::fmt(angle, f),
            Self::Frequency(frequency) => fmt::Display::fmt(frequency, f),
            Self::Length(length) => fmt::Display::fmt(length, f),
            Self::Percentage(percentage) => fmt::Display::fmt(percentage, f),
            Self::Time(time) => fmt::Display::fmt(time, f),
        }
    }
}

/// Shared by both grammars so every division rejects a zero denominator the
/// same way.
///
/// # Panics
///
/// Panics if `denominator` is zero.
pub(crate) fn checked_denominator(denominator: f64) -> f64 {
    assert!(denominator != 0.0, "calc() division by zero");
    denominator
}

fn length_to_px(length: Length, context: Option<&LayoutContext>) -> f64 {
    let Some(context) = context else {
        panic!("calc() cannot resolve the length {length} without a layout context");
    };
    length.to_px(context)
}

fn missing_basis(expected: &str, basis: &PercentageBasis) -> ! {
    panic!("calc() needs a {expected} percentage basis, but the basis is {basis:?}")
}

fn mismatched(op: SumOperation, lhs: CalculationResult, rhs: CalculationResult) -> ! {
    panic!("calc() cannot combine {lhs} {op} {rhs}: mismatched types")
}
