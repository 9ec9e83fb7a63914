//! Zero-divisor detection.
//!
//! [§ 10.9 Range Checking](https://www.w3.org/TR/css-values-4/#calc-range)
//!
//! Every divisor comes from the number-only grammar, so it can be evaluated
//! before any layout context or percentage basis exists. A nested divisor is
//! checked before the divisor containing it is evaluated, so detection never
//! divides by zero itself.

use super::expression::{
    CalcNumberProduct, CalcNumberSum, CalcNumberValue, CalcProduct, CalcProductPart, CalcSum,
    CalcValue, ProductOperation,
};

fn is_zero_divisor(divisor: &CalcNumberValue) -> bool {
    divisor.has_zero_divisor() || divisor.resolve().value() == 0.0
}

impl CalcSum {
    /// Whether some divisor anywhere in the tree evaluates to zero.
    pub(crate) fn has_zero_divisor(&self) -> bool {
        self.first().has_zero_divisor()
            || self
                .parts()
                .iter()
                .any(|part| part.product().has_zero_divisor())
    }
}

impl CalcProduct {
    fn has_zero_divisor(&self) -> bool {
        self.first().has_zero_divisor()
            || self.parts().iter().any(|part| match part {
                CalcProductPart::Multiply(value) => value.has_zero_divisor(),
                CalcProductPart::Divide(divisor) => is_zero_divisor(divisor),
            })
    }
}

impl CalcValue {
    fn has_zero_divisor(&self) -> bool {
        match self {
            Self::Sum(sum) => sum.has_zero_divisor(),
            _ => false,
        }
    }
}

impl CalcNumberSum {
    fn has_zero_divisor(&self) -> bool {
        self.first().has_zero_divisor()
            || self
                .parts()
                .iter()
                .any(|part| part.product().has_zero_divisor())
    }
}

impl CalcNumberProduct {
    fn has_zero_divisor(&self) -> bool {
        self.first().has_zero_divisor()
            || self.parts().iter().any(|part| match part.op() {
                ProductOperation::Multiply => part.value().has_zero_divisor(),
                ProductOperation::Divide => is_zero_divisor(part.value()),
            })
    }
}

impl CalcNumberValue {
    fn has_zero_divisor(&self) -> bool {
        match self {
            Self::Sum(sum) => sum.has_zero_divisor(),
            Self::Number(_) => false,
        }
    }
}
