//! The calc() expression tree.
//!
//! [§ 10.1 Syntax](https://www.w3.org/TR/css-values-4/#calc-syntax)
//!
//! ```text
//! <calc-sum> = <calc-product> [ [ '+' | '-' ] <calc-product> ]*
//! <calc-product> = <calc-value> [ '*' <calc-value> | '/' <calc-number-value> ]*
//! <calc-value> = <number> | <dimension> | <percentage> | ( <calc-sum> )
//! <calc-number-sum> = <calc-number-product> [ [ '+' | '-' ] <calc-number-product> ]*
//! <calc-number-product> = <calc-number-value> [ '*' <calc-number-value> | '/' <calc-number-value> ]*
//! <calc-number-value> = <number> | ( <calc-number-sum> )
//! ```
//!
//! The number-only grammar is a separate family of types, so a divisor can
//! never hold a dimension. Every node owns its children and is immutable
//! once built; trees are assembled with the `new`/`plus`/`minus`/`times`/
//! `divided_by` builders or deserialized.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::result::{CalculationResult, PercentageBasis, checked_denominator};
use crate::layout_context::LayoutContext;
use crate::values::{Angle, Frequency, Length, Number, Percentage, Time};

/// `+` or `-` between the products of a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum SumOperation {
    /// `+`
    #[strum(to_string = "+")]
    Add,
    /// `-`
    #[strum(to_string = "-")]
    Subtract,
}

/// `*` or `/` between the values of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ProductOperation {
    /// `*`
    #[strum(to_string = "*")]
    Multiply,
    /// `/`
    #[strum(to_string = "/")]
    Divide,
}

/// `<calc-sum>`: a first product followed by `+`/`-` products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcSum {
    first: CalcProduct,
    #[serde(default)]
    rest: Vec<CalcSumPart>,
}

/// One `+ <calc-product>` or `- <calc-product>` of a [`CalcSum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcSumPart {
    op: SumOperation,
    product: CalcProduct,
}

/// `<calc-product>`: a first value followed by `*`/`/` parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcProduct {
    first: CalcValue,
    #[serde(default)]
    rest: Vec<CalcProductPart>,
}

/// One `* <calc-value>` or `/ <calc-number-value>` of a [`CalcProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcProductPart {
    /// `* <calc-value>`
    Multiply(CalcValue),
    /// `/ <calc-number-value>`
    Divide(CalcNumberValue),
}

/// `<calc-value>`: a leaf or a parenthesized sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcValue {
    /// A `<number>` or `<integer>` leaf.
    Number(Number),
    /// An `<angle>` leaf.
    Angle(Angle),
    /// A `<frequency>` leaf.
    Frequency(Frequency),
    /// A `<length>` leaf.
    Length(Length),
    /// A `<percentage>` leaf.
    Percentage(Percentage),
    /// A `<time>` leaf.
    Time(Time),
    /// `( <calc-sum> )`
    Sum(Box<CalcSum>),
}

/// `<calc-number-sum>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcNumberSum {
    first: CalcNumberProduct,
    #[serde(default)]
    rest: Vec<CalcNumberSumPart>,
}

/// One `+`/`-` part of a [`CalcNumberSum`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcNumberSumPart {
    op: SumOperation,
    product: CalcNumberProduct,
}

/// `<calc-number-product>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcNumberProduct {
    first: CalcNumberValue,
    #[serde(default)]
    rest: Vec<CalcNumberProductPart>,
}

/// One `*`/`/` part of a [`CalcNumberProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcNumberProductPart {
    op: ProductOperation,
    value: CalcNumberValue,
}

/// `<calc-number-value>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcNumberValue {
    /// A `<number>` or `<integer>` leaf.
    Number(Number),
    /// `( <calc-number-sum> )`
    Sum(Box<CalcNumberSum>),
}

// Builders

impl CalcSum {
    /// A sum of a single product.
    #[must_use]
    pub fn new(first: impl Into<CalcProduct>) -> Self {
        Self {
            first: first.into(),
            rest: Vec::new(),
        }
    }

    /// Append `+ product`.
    #[must_use]
    pub fn plus(mut self, product: impl Into<CalcProduct>) -> Self {
        self.rest.push(CalcSumPart {
            op: SumOperation::Add,
            product: product.into(),
        });
        self
    }

    /// Append `- product`.
    #[must_use]
    pub fn minus(mut self, product: impl Into<CalcProduct>) -> Self {
        self.rest.push(CalcSumPart {
            op: SumOperation::Subtract,
            product: product.into(),
        });
        self
    }

    /// The leading product.
    #[must_use]
    pub const fn first(&self) -> &CalcProduct {
        &self.first
    }

    /// The `+`/`-` parts after the first product, in source order.
    #[must_use]
    pub fn parts(&self) -> &[CalcSumPart] {
        &self.rest
    }
}

impl CalcSumPart {
    /// `+` or `-`.
    #[must_use]
    pub const fn op(&self) -> SumOperation {
        self.op
    }

    /// The right-hand product.
    #[must_use]
    pub const fn product(&self) -> &CalcProduct {
        &self.product
    }
}

impl CalcProduct {
    /// A product of a single value.
    #[must_use]
    pub fn new(first: impl Into<CalcValue>) -> Self {
        Self {
            first: first.into(),
            rest: Vec::new(),
        }
    }

    /// Append `* value`.
    #[must_use]
    pub fn times(mut self, value: impl Into<CalcValue>) -> Self {
        self.rest.push(CalcProductPart::Multiply(value.into()));
        self
    }

    /// Append `/ divisor`.
    #[must_use]
    pub fn divided_by(mut self, divisor: impl Into<CalcNumberValue>) -> Self {
        self.rest.push(CalcProductPart::Divide(divisor.into()));
        self
    }

    /// The leading value.
    #[must_use]
    pub const fn first(&self) -> &CalcValue {
        &self.first
    }

    /// The `*`/`/` parts after the first value, in source order.
    #[must_use]
    pub fn parts(&self) -> &[CalcProductPart] {
        &self.rest
    }
}

impl CalcProductPart {
    /// `*` or `/`.
    #[must_use]
    pub const fn op(&self) -> ProductOperation {
        match self {
            Self::Multiply(_) => ProductOperation::Multiply,
            Self::Divide(_) => ProductOperation::Divide,
        }
    }
}

impl CalcNumberSum {
    /// A sum of a single product.
    #[must_use]
    pub fn new(first: impl Into<CalcNumberProduct>) -> Self {
        Self {
            first: first.into(),
            rest: Vec::new(),
        }
    }

    /// Append `+ product`.
    #[must_use]
    pub fn plus(mut self, product: impl Into<CalcNumberProduct>) -> Self {
        self.rest.push(CalcNumberSumPart {
            op: SumOperation::Add,
            product: product.into(),
        });
        self
    }

    /// Append `- product`.
    #[must_use]
    pub fn minus(mut self, product: impl Into<CalcNumberProduct>) -> Self {
        self.rest.push(CalcNumberSumPart {
            op: SumOperation::Subtract,
            product: product.into(),
        });
        self
    }

    /// The leading product.
    #[must_use]
    pub const fn first(&self) -> &CalcNumberProduct {
        &self.first
    }

    /// The `+`/`-` parts after the first product, in source order.
    #[must_use]
    pub fn parts(&self) -> &[CalcNumberSumPart] {
        &self.rest
    }
}

impl CalcNumberSumPart {
    /// `+` or `-`.
    #[must_use]
    pub const fn op(&self) -> SumOperation {
        self.op
    }

    /// The right-hand product.
    #[must_use]
    pub const fn product(&self) -> &CalcNumberProduct {
        &self.product
    }
}

impl CalcNumberProduct {
    /// A product of a single value.
    #[must_use]
    pub fn new(first: impl Into<CalcNumberValue>) -> Self {
        Self {
            first: first.into(),
            rest: Vec::new(),
        }
    }

    /// Append `* value`.
    #[must_use]
    pub fn times(mut self, value: impl Into<CalcNumberValue>) -> Self {
        self.rest.push(CalcNumberProductPart {
            op: ProductOperation::Multiply,
            value: value.into(),
        });
        self
    }

    /// Append `/ divisor`.
    #[must_use]
    pub fn divided_by(mut self, divisor: impl Into<CalcNumberValue>) -> Self {
        self.rest.push(CalcNumberProductPart {
            op: ProductOperation::Divide,
            value: divisor.into(),
        });
        self
    }

    /// The leading value.
    #[must_use]
    pub const fn first(&self) -> &CalcNumberValue {
        &self.first
    }

    /// The `*`/`/` parts after the first value, in source order.
    #[must_use]
    pub fn parts(&self) -> &[CalcNumberProductPart] {
        &self.rest
    }
}

impl CalcNumberProductPart {
    /// `*` or `/`.
    #[must_use]
    pub const fn op(&self) -> ProductOperation {
        self.op
    }

    /// The right-hand value.
    #[must_use]
    pub const fn value(&self) -> &CalcNumberValue {
        &self.value
    }
}

// Conversions

macro_rules! impl_leaf_conversions {
    ($($leaf:ident),* $(,)?) => {
        $(
            impl From<$leaf> for CalcValue {
                fn from(value: $leaf) -> Self {
                    Self::$leaf(value)
                }
            }

            impl From<$leaf> for CalcProduct {
                fn from(value: $leaf) -> Self {
                    Self::new(value)
                }
            }

            impl From<$leaf> for CalcSum {
                fn from(value: $leaf) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_leaf_conversions!(Number, Angle, Frequency, Length, Percentage, Time);

impl From<CalcSum> for CalcValue {
    fn from(sum: CalcSum) -> Self {
        Self::Sum(Box::new(sum))
    }
}

impl From<CalcSum> for CalcProduct {
    fn from(sum: CalcSum) -> Self {
        Self::new(sum)
    }
}

impl From<CalcValue> for CalcProduct {
    fn from(value: CalcValue) -> Self {
        Self::new(value)
    }
}

impl From<CalcProduct> for CalcSum {
    fn from(product: CalcProduct) -> Self {
        Self::new(product)
    }
}

impl From<CalcValue> for CalcSum {
    fn from(value: CalcValue) -> Self {
        Self::new(value)
    }
}

impl From<Number> for CalcNumberValue {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<CalcNumberSum> for CalcNumberValue {
    fn from(sum: CalcNumberSum) -> Self {
        Self::Sum(Box::new(sum))
    }
}

impl From<Number> for CalcNumberProduct {
    fn from(number: Number) -> Self {
        Self::new(number)
    }
}

impl From<CalcNumberValue> for CalcNumberProduct {
    fn from(value: CalcNumberValue) -> Self {
        Self::new(value)
    }
}

impl From<CalcNumberSum> for CalcNumberProduct {
    fn from(sum: CalcNumberSum) -> Self {
        Self::new(sum)
    }
}

impl From<Number> for CalcNumberSum {
    fn from(number: Number) -> Self {
        Self::new(number)
    }
}

impl From<CalcNumberProduct> for CalcNumberSum {
    fn from(product: CalcNumberProduct) -> Self {
        Self::new(product)
    }
}

// Resolution
//
// [§ 10.10 Evaluating Calculations](https://www.w3.org/TR/css-values-4/#calc-computed-value)
//
// Every node folds its children left to right, in source order.

impl CalcSum {
    /// Evaluate this sum.
    ///
    /// # Panics
    ///
    /// Panics on the conditions documented on [`CalculationResult::add`],
    /// [`CalculationResult::multiply_by`] and
    /// [`CalculationResult::divide_by`]. A tree accepted by
    /// [`super::CalculatedStyleValue::new`] only reaches them through a
    /// missing context or basis.
    #[must_use]
    pub fn resolve(
        &self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> CalculationResult {
        self.rest.iter().fold(
            self.first.resolve(context, basis),
            |accumulator, part| {
                let rhs = part.product.resolve(context, basis);
                accumulator.add_or_subtract(part.op, rhs, context, basis)
            },
        )
    }

    /// Whether any leaf, at any depth, is a `<percentage>`.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        self.first.contains_percentage()
            || self
                .rest
                .iter()
                .any(|part| part.product.contains_percentage())
    }
}

impl CalcProduct {
    /// Evaluate this product.
    ///
    /// # Panics
    ///
    /// See [`CalcSum::resolve`].
    #[must_use]
    pub fn resolve(
        &self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> CalculationResult {
        self.rest.iter().fold(
            self.first.resolve(context, basis),
            |accumulator, part| match part {
                CalcProductPart::Multiply(value) => {
                    accumulator.multiply_by(value.resolve(context, basis), context)
                }
                CalcProductPart::Divide(divisor) => {
                    accumulator.divide_by(CalculationResult::Number(divisor.resolve()), context)
                }
            },
        )
    }

    /// Whether any leaf, at any depth, is a `<percentage>`.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        self.first.contains_percentage()
            || self.rest.iter().any(|part| match part {
                CalcProductPart::Multiply(value) => value.contains_percentage(),
                CalcProductPart::Divide(_) => false,
            })
    }
}

impl CalcValue {
    /// Evaluate this value.
    ///
    /// # Panics
    ///
    /// See [`CalcSum::resolve`].
    #[must_use]
    pub fn resolve(
        &self,
        context: Option<&LayoutContext>,
        basis: &PercentageBasis,
    ) -> CalculationResult {
        match self {
            Self::Number(number) => CalculationResult::Number(*number),
            Self::Angle(angle) => CalculationResult::Angle(*angle),
            Self::Frequency(frequency) => CalculationResult::Frequency(*frequency),
            Self::Length(length) => CalculationResult::Length(*length),
            Self::Percentage(percentage) => CalculationResult::Percentage(*percentage),
            Self::Time(time) => CalculationResult::Time(*time),
            Self::Sum(sum) => sum.resolve(context, basis),
        }
    }

    /// Whether this is, or contains, a `<percentage>`.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        match self {
            Self::Percentage(_) => true,
            Self::Sum(sum) => sum.contains_percentage(),
            _ => false,
        }
    }
}

impl CalcNumberSum {
    /// Evaluate this sum. Number-only trees need neither a layout context
    /// nor a percentage basis.
    ///
    /// # Panics
    ///
    /// Panics if a divisor evaluates to zero.
    #[must_use]
    pub fn resolve(&self) -> Number {
        self.rest
            .iter()
            .fold(self.first.resolve(), |accumulator, part| {
                let rhs = part.product.resolve();
                match part.op {
                    SumOperation::Add => accumulator + rhs,
                    SumOperation::Subtract => accumulator - rhs,
                }
            })
    }
}

impl CalcNumberProduct {
    /// Evaluate this product.
    ///
    /// # Panics
    ///
    /// Panics if a divisor evaluates to zero.
    #[must_use]
    pub fn resolve(&self) -> Number {
        self.rest
            .iter()
            .fold(self.first.resolve(), |accumulator, part| {
                let rhs = part.value.resolve();
                match part.op {
                    ProductOperation::Multiply => accumulator * rhs,
                    ProductOperation::Divide => {
                        accumulator / Number::number(checked_denominator(rhs.value()))
                    }
                }
            })
    }
}

impl CalcNumberValue {
    /// Evaluate this value.
    ///
    /// # Panics
    ///
    /// Panics if a nested divisor evaluates to zero.
    #[must_use]
    pub fn resolve(&self) -> Number {
        match self {
            Self::Number(number) => *number,
            Self::Sum(sum) => sum.resolve(),
        }
    }
}

// Serialization
//
// [§ 10.12 Serialization](https://www.w3.org/TR/css-values-4/#calc-serialize)

impl fmt::Display for CalcSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for part in &self.rest {
            write!(f, " {} {}", part.op, part.product)?;
        }
        Ok(())
    }
}

impl fmt::Display for CalcProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for part in &self.rest {
            match part {
                CalcProductPart::Multiply(value) => write!(f, " * {value}")?,
                CalcProductPart::Divide(divisor) => write!(f, " / {divisor}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Angle(angle) => write!(f, "{angle}"),
            Self::Frequency(frequency) => write!(f, "{frequency}"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Percentage(percentage) => write!(f, "{percentage}"),
            Self::Time(time) => write!(f, "{time}"),
            Self::Sum(sum) => write!(f, "({sum})"),
        }
    }
}

impl fmt::Display for CalcNumberSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for part in &self.rest {
            write!(f, " {} {}", part.op, part.product)?;
        }
        Ok(())
    }
}

impl fmt::Display for CalcNumberProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for part in &self.rest {
            write!(f, " {} {}", part.op, part.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for CalcNumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Sum(sum) => write!(f, "({sum})"),
        }
    }
}
