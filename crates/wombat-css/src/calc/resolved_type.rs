//! Static type resolution for calc() expressions.
//!
//! [§ 10.7 Type Checking](https://www.w3.org/TR/css-values-4/#calc-type-checking)
//!
//! "A math function can be many possible types, such as `<length>`,
//! `<number>`, etc., depending on the calculations it contains." The type is
//! found from the tree's shape and leaf units alone, without evaluating any
//! magnitude and without a layout context.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::expression::{
    CalcNumberProduct, CalcNumberSum, CalcNumberValue, CalcProduct, CalcProductPart, CalcSum,
    CalcValue, ProductOperation,
};

/// The CSS type a calc() expression produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedType {
    /// `<angle>`
    #[strum(to_string = "<angle>")]
    Angle,
    /// `<frequency>`
    #[strum(to_string = "<frequency>")]
    Frequency,
    /// `<integer>`
    #[strum(to_string = "<integer>")]
    Integer,
    /// `<length>`
    #[strum(to_string = "<length>")]
    Length,
    /// `<number>`
    #[strum(to_string = "<number>")]
    Number,
    /// `<percentage>`
    #[strum(to_string = "<percentage>")]
    Percentage,
    /// `<time>`
    #[strum(to_string = "<time>")]
    Time,
}

impl ResolvedType {
    /// `<number>` or `<integer>`.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Number | Self::Integer)
    }

    /// A unit-bearing type: neither number-like nor `<percentage>`.
    #[must_use]
    pub const fn is_dimension(self) -> bool {
        !self.is_number() && !matches!(self, Self::Percentage)
    }
}

/// "At + or -, check that both sides have the same type, or that one side is
/// a `<number>` and the other is an `<integer>`."
///
/// A `<percentage>` also combines with any dimension and takes that
/// dimension's type, standing in for whatever dimension the property accepts.
fn resolve_sum_type(
    first: Option<ResolvedType>,
    rest: impl IntoIterator<Item = Option<ResolvedType>>,
) -> Option<ResolvedType> {
    rest.into_iter().try_fold(first?, |current, next| {
        let next = next?;
        if current == next {
            Some(current)
        } else if current.is_number() && next.is_number() {
            Some(ResolvedType::Number)
        } else if current == ResolvedType::Percentage && next.is_dimension() {
            Some(next)
        } else if current.is_dimension() && next == ResolvedType::Percentage {
            Some(current)
        } else {
            None
        }
    })
}

/// "At *, check that at least one side is `<number>`. If both sides are
/// `<integer>`, resolve to `<integer>`. Otherwise, resolve to the type of the
/// other side."
///
/// "At /, check that the right side is `<number>`. If the left side is
/// `<integer>`, resolve to `<number>`. Otherwise, resolve to the type of the
/// left side."
fn resolve_product_type(
    first: Option<ResolvedType>,
    rest: impl IntoIterator<Item = (ProductOperation, Option<ResolvedType>)>,
) -> Option<ResolvedType> {
    rest.into_iter().try_fold(first?, |current, (op, next)| {
        let next = next?;
        match op {
            ProductOperation::Multiply => {
                if current == ResolvedType::Integer && next == ResolvedType::Integer {
                    Some(ResolvedType::Integer)
                } else if current.is_number() && next.is_number() {
                    Some(ResolvedType::Number)
                } else if current.is_number() {
                    Some(next)
                } else if next.is_number() {
                    Some(current)
                } else {
                    None
                }
            }
            ProductOperation::Divide if !next.is_number() => None,
            ProductOperation::Divide if current == ResolvedType::Integer => {
                Some(ResolvedType::Number)
            }
            ProductOperation::Divide => Some(current),
        }
    })
}

impl CalcSum {
    /// The type this sum produces, or `None` if its operands cannot be
    /// combined.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        resolve_sum_type(
            self.first().resolved_type(),
            self.parts().iter().map(|part| part.product().resolved_type()),
        )
    }
}

impl CalcProduct {
    /// The type this product produces, or `None` if its operands cannot be
    /// combined.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        resolve_product_type(
            self.first().resolved_type(),
            self.parts().iter().map(|part| {
                let part_type = match part {
                    CalcProductPart::Multiply(value) => value.resolved_type(),
                    CalcProductPart::Divide(divisor) => divisor.resolved_type(),
                };
                (part.op(), part_type)
            }),
        )
    }
}

impl CalcValue {
    /// The type of this leaf, or of the nested sum.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        match self {
            Self::Number(number) if number.is_integer() => Some(ResolvedType::Integer),
            Self::Number(_) => Some(ResolvedType::Number),
            Self::Angle(_) => Some(ResolvedType::Angle),
            Self::Frequency(_) => Some(ResolvedType::Frequency),
            Self::Length(_) => Some(ResolvedType::Length),
            Self::Percentage(_) => Some(ResolvedType::Percentage),
            Self::Time(_) => Some(ResolvedType::Time),
            Self::Sum(sum) => sum.resolved_type(),
        }
    }
}

impl CalcNumberSum {
    /// `<number>` or `<integer>`.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        resolve_sum_type(
            self.first().resolved_type(),
            self.parts().iter().map(|part| part.product().resolved_type()),
        )
    }
}

impl CalcNumberProduct {
    /// `<number>` or `<integer>`.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        resolve_product_type(
            self.first().resolved_type(),
            self.parts()
                .iter()
                .map(|part| (part.op(), part.value().resolved_type())),
        )
    }
}

impl CalcNumberValue {
    /// `<number>` or `<integer>`.
    #[must_use]
    pub fn resolved_type(&self) -> Option<ResolvedType> {
        match self {
            Self::Number(number) if number.is_integer() => Some(ResolvedType::Integer),
            Self::Number(_) => Some(ResolvedType::Number),
            Self::Sum(sum) => sum.resolved_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_type_rules() {
        use ResolvedType::{Angle, Integer, Length, Number, Percentage, Time};

        assert_eq!(resolve_sum_type(Some(Length), [Some(Length)]), Some(Length));
        assert_eq!(resolve_sum_type(Some(Integer), [Some(Number)]), Some(Number));
        assert_eq!(resolve_sum_type(Some(Percentage), [Some(Angle)]), Some(Angle));
        assert_eq!(resolve_sum_type(Some(Time), [Some(Percentage)]), Some(Time));
        assert_eq!(resolve_sum_type(Some(Length), [Some(Angle)]), None);
        assert_eq!(resolve_sum_type(Some(Number), [Some(Percentage)]), None);
        assert_eq!(resolve_sum_type(Some(Length), [None]), None);
    }

    #[test]
    fn test_product_type_rules() {
        use ProductOperation::{Divide, Multiply};
        use ResolvedType::{Integer, Length, Number, Percentage};

        assert_eq!(
            resolve_product_type(Some(Integer), [(Multiply, Some(Integer))]),
            Some(Integer)
        );
        assert_eq!(
            resolve_product_type(Some(Number), [(Multiply, Some(Integer))]),
            Some(Number)
        );
        assert_eq!(
            resolve_product_type(Some(Integer), [(Multiply, Some(Length))]),
            Some(Length)
        );
        assert_eq!(
            resolve_product_type(Some(Percentage), [(Multiply, Some(Number))]),
            Some(Percentage)
        );
        assert_eq!(
            resolve_product_type(Some(Length), [(Multiply, Some(Length))]),
            None
        );
        assert_eq!(
            resolve_product_type(Some(Integer), [(Divide, Some(Integer))]),
            Some(Number)
        );
        assert_eq!(
            resolve_product_type(Some(Length), [(Divide, Some(Number))]),
            Some(Length)
        );
        assert_eq!(
            resolve_product_type(Some(Length), [(Divide, Some(Length))]),
            None
        );
    }
}
