//! CSS math functions: `calc()`
//!
//! [§ 10 Mathematical Expressions](https://www.w3.org/TR/css-values-4/#math)
//!
//! "The math functions (calc(), clamp(), sin(), and others defined in this
//! chapter) allow numeric CSS values to be written as mathematical
//! expressions."
//!
//! Only `calc()` is supported. An expression arrives as an already-built
//! [`CalcSum`] tree; [`CalculatedStyleValue::new`] validates it once, after
//! which it is resolved on demand against a [`LayoutContext`] and a
//! [`PercentageBasis`].

mod expression;
mod resolved_type;
mod result;
mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wombat_common::warning::warn_once;

pub use expression::{
    CalcNumberProduct, CalcNumberProductPart, CalcNumberSum, CalcNumberSumPart, CalcNumberValue,
    CalcProduct, CalcProductPart, CalcSum, CalcSumPart, CalcValue, ProductOperation, SumOperation,
};
pub use resolved_type::ResolvedType;
pub use result::{CalculationResult, PercentageBasis};

use crate::layout_context::LayoutContext;
use crate::values::{Angle, Frequency, Length, Number, Percentage, Time};

/// Why an expression tree was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// [§ 10.7](https://www.w3.org/TR/css-values-4/#calc-type-checking)
    ///
    /// "If a math function's type is failure, the math function is invalid."
    #[error("invalid type combination in {expression}")]
    InvalidTypeCombination {
        /// The serialized expression.
        expression: String,
    },
    /// [§ 10.9](https://www.w3.org/TR/css-values-4/#calc-range)
    ///
    /// A divisor evaluates to zero.
    #[error("division by zero in {expression}")]
    DivisionByZero {
        /// The serialized expression.
        expression: String,
    },
}

/// A validated `calc()` expression.
///
/// Two values are equal when they serialize to the same text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CalcSum", into = "CalcSum")]
pub struct CalculatedStyleValue {
    expression: CalcSum,
    resolved_type: ResolvedType,
}

impl CalculatedStyleValue {
    /// Validate `expression` and wrap it.
    ///
    /// # Errors
    ///
    /// [`CalcError::InvalidTypeCombination`] when the operand types cannot be
    /// combined, [`CalcError::DivisionByZero`] when any divisor evaluates to
    /// zero. Rejections are also reported once through `warn_once`.
    pub fn new(expression: CalcSum) -> Result<Self, CalcError> {
        let serialized = || format!("calc({expression})");

        let Some(resolved_type) = expression.resolved_type() else {
            return Err(report(CalcError::InvalidTypeCombination {
                expression: serialized(),
            }));
        };
        if expression.has_zero_divisor() {
            return Err(report(CalcError::DivisionByZero {
                expression: serialized(),
            }));
        }

        Ok(Self {
            expression,
            resolved_type,
        })
    }

    /// The expression tree.
    #[must_use]
    pub const fn expression(&self) -> &CalcSum {
        &self.expression
    }

    /// The type the expression produces.
    #[must_use]
    pub const fn resolved_type(&self) -> ResolvedType {
        self.resolved_type
    }

    /// Whether resolving this expression needs a percentage basis to yield
    /// a dimension.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        self.expression.contains_percentage()
    }

    /// Evaluate the whole expression.
    ///
    /// # Panics
    ///
    /// Panics if a length must be resolved and `context` is `None`, or if a
    /// percentage meets a dimension that `basis` does not provide. The typed
    /// `resolve_*` accessors check for both and return `None` instead.
    #[must_use]
    pub fn resolve(
        &self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> CalculationResult {
        self.expression.resolve(context, basis)
    }

    /// Evaluate only if the expression has one of the `accepted` types.
    /// A percentage mixed into a dimension needs `basis` to hold that
    /// dimension, otherwise this is `None`.
    fn resolve_if(
        &self,
        accepted: &[ResolvedType],
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> Option<CalculationResult> {
        if !accepted.contains(&self.resolved_type) {
            return None;
        }
        let basis_matches = match (self.resolved_type, basis) {
            (ResolvedType::Angle, PercentageBasis::Angle(_))
            | (ResolvedType::Frequency, PercentageBasis::Frequency(_))
            | (ResolvedType::Length, PercentageBasis::Length(_))
            | (ResolvedType::Time, PercentageBasis::Time(_)) => true,
            (resolved_type, _) => !resolved_type.is_dimension(),
        };
        if self.contains_percentage() && !basis_matches {
            return None;
        }
        Some(self.expression.resolve(context, basis))
    }

    /// The `<angle>` this expression evaluates to.
    #[must_use]
    pub fn resolve_angle(&self) -> Option<Angle> {
        self.resolve_if(&[ResolvedType::Angle], None, &PercentageBasis::None)?
            .angle()
    }

    /// The `<angle-percentage>` this expression evaluates to, with
    /// percentages taken of `basis`.
    #[must_use]
    pub fn resolve_angle_percentage(&self, basis: Angle) -> Option<Angle> {
        let result = self.resolve_if(
            &[ResolvedType::Angle, ResolvedType::Percentage],
            None,
            &PercentageBasis::Angle(basis),
        )?;
        match result {
            CalculationResult::Angle(angle) => Some(angle),
            CalculationResult::Percentage(percentage) => Some(basis.percentage_of(percentage)),
            _ => None,
        }
    }

    /// The `<frequency>` this expression evaluates to.
    #[must_use]
    pub fn resolve_frequency(&self) -> Option<Frequency> {
        self.resolve_if(&[ResolvedType::Frequency], None, &PercentageBasis::None)?
            .frequency()
    }

    /// The `<frequency-percentage>` this expression evaluates to.
    #[must_use]
    pub fn resolve_frequency_percentage(&self, basis: Frequency) -> Option<Frequency> {
        let result = self.resolve_if(
            &[ResolvedType::Frequency, ResolvedType::Percentage],
            None,
            &PercentageBasis::Frequency(basis),
        )?;
        match result {
            CalculationResult::Frequency(frequency) => Some(frequency),
            CalculationResult::Percentage(percentage) => Some(basis.percentage_of(percentage)),
            _ => None,
        }
    }

    /// The `<length>` this expression evaluates to, in px.
    ///
    /// `None` when percentages are mixed in; those need
    /// [`Self::resolve_length_percentage`].
    #[must_use]
    pub fn resolve_length(&self, context: &LayoutContext) -> Option<Length> {
        self.resolve_if(
            &[ResolvedType::Length],
            Some(context),
            &PercentageBasis::None,
        )?
        .length()
        .map(|length| Length::make_px(length.to_px(context)))
    }

    /// The `<length-percentage>` this expression evaluates to, in px, with
    /// percentages taken of `basis`.
    #[must_use]
    pub fn resolve_length_percentage(
        &self,
        context: &LayoutContext,
        basis: Length,
    ) -> Option<Length> {
        let result = self.resolve_if(
            &[ResolvedType::Length, ResolvedType::Percentage],
            Some(context),
            &PercentageBasis::Length(basis),
        )?;
        let length = match result {
            CalculationResult::Length(length) => length,
            CalculationResult::Percentage(percentage) => basis.percentage_of(percentage),
            _ => return None,
        };
        Some(Length::make_px(length.to_px(context)))
    }

    /// The `<percentage>` this expression evaluates to.
    #[must_use]
    pub fn resolve_percentage(&self) -> Option<Percentage> {
        self.resolve_if(&[ResolvedType::Percentage], None, &PercentageBasis::None)?
            .percentage()
    }

    /// The `<time>` this expression evaluates to.
    #[must_use]
    pub fn resolve_time(&self) -> Option<Time> {
        self.resolve_if(&[ResolvedType::Time], None, &PercentageBasis::None)?
            .time()
    }

    /// The `<time-percentage>` this expression evaluates to.
    #[must_use]
    pub fn resolve_time_percentage(&self, basis: Time) -> Option<Time> {
        let result = self.resolve_if(
            &[ResolvedType::Time, ResolvedType::Percentage],
            None,
            &PercentageBasis::Time(basis),
        )?;
        match result {
            CalculationResult::Time(time) => Some(time),
            CalculationResult::Percentage(percentage) => Some(basis.percentage_of(percentage)),
            _ => None,
        }
    }

    /// The `<number>` this expression evaluates to.
    #[must_use]
    pub fn resolve_number(&self) -> Option<f64> {
        self.resolve_if(
            &[ResolvedType::Number, ResolvedType::Integer],
            None,
            &PercentageBasis::None,
        )?
        .number()
        .map(Number::value)
    }

    /// [§ 10.9 Range Checking](https://www.w3.org/TR/css-values-4/#calc-range)
    ///
    /// "Values must be rounded towards the nearest integer if the context
    /// requires an `<integer>`."
    #[must_use]
    pub fn resolve_integer(&self) -> Option<i64> {
        self.resolve_if(
            &[ResolvedType::Number, ResolvedType::Integer],
            None,
            &PercentageBasis::None,
        )?
        .number()
        .map(Number::integer_value)
    }
}

fn report(error: CalcError) -> CalcError {
    warn_once("CSS", &error.to_string());
    error
}

impl fmt::Display for CalculatedStyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calc({})", self.expression)
    }
}

impl PartialEq for CalculatedStyleValue {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl TryFrom<CalcSum> for CalculatedStyleValue {
    type Error = CalcError;

    fn try_from(expression: CalcSum) -> Result<Self, Self::Error> {
        Self::new(expression)
    }
}

impl From<CalculatedStyleValue> for CalcSum {
    fn from(value: CalculatedStyleValue) -> Self {
        value.expression
    }
}
