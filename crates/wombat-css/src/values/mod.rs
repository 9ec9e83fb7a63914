//! CSS unit value types
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Every type here is an immutable scalar: a raw magnitude plus, for the
//! dimension types, a unit tag. Each dimension converts to one canonical unit
//! (px, degrees, seconds, hertz), and each can produce a same-typed value
//! from a [`Percentage`] via `percentage_of`.

mod angle;
mod color;
mod frequency;
mod length;
mod number;
mod percentage;
mod time;

pub use angle::{Angle, AngleUnit};
pub use color::Color;
pub use frequency::{Frequency, FrequencyUnit};
pub use length::{Length, LengthUnit};
pub use number::{Number, NumberType};
pub use percentage::Percentage;
pub use time::{Time, TimeUnit};

use thiserror::Error;

/// Error returned when CSS text cannot be read as a unit value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    /// The text has no leading numeric part (e.g. `"px"`).
    #[error("missing number in '{0}'")]
    MissingNumber(String),
    /// The numeric part is malformed (e.g. `"1.2.3px"`).
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// The unit is not one this value type understands.
    #[error("unknown {kind} unit '{unit}'")]
    UnknownUnit {
        /// The value type being parsed (`length`, `angle`, ...).
        kind: &'static str,
        /// The unit text as written.
        unit: String,
    },
}

/// [§ 4.4 Dimensions](https://www.w3.org/TR/css-values-4/#dimensions)
///
/// "The general term dimension refers to a number with a unit attached to it;
/// and is denoted by `<dimension>`."
///
/// Split `"12.5px"` into `(12.5, "px")`. The exponent marker is only consumed
/// when a digit follows it, so `"1em"` and `"2ex"` keep their units.
pub(crate) fn split_dimension(input: &str) -> Result<(f64, &str), ValueParseError> {
    let input = input.trim();
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if exponent_end < bytes.len() && matches!(bytes[exponent_end], b'+' | b'-') {
            exponent_end += 1;
        }
        if exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
                exponent_end += 1;
            }
            end = exponent_end;
        }
    }

    let (number, unit) = input.split_at(end);
    if number.is_empty() || number == "+" || number == "-" {
        return Err(ValueParseError::MissingNumber(input.to_string()));
    }
    let value = number
        .parse::<f64>()
        .map_err(|_| ValueParseError::InvalidNumber(number.to_string()))?;
    Ok((value, unit))
}

/// Parse the unit part of a dimension with a `strum`-derived `FromStr`.
pub(crate) fn parse_unit<U>(kind: &'static str, unit: &str) -> Result<U, ValueParseError>
where
    U: std::str::FromStr<Err = strum::ParseError>,
{
    unit.parse::<U>().map_err(|_| ValueParseError::UnknownUnit {
        kind,
        unit: unit.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_dimension_basic() {
        assert_eq!(split_dimension("10px"), Ok((10.0, "px")));
        assert_eq!(split_dimension(" -2.5deg "), Ok((-2.5, "deg")));
        assert_eq!(split_dimension("+3"), Ok((3.0, "")));
        assert_eq!(split_dimension(".5s"), Ok((0.5, "s")));
    }

    #[test]
    fn test_split_dimension_exponent_vs_font_units() {
        assert_eq!(split_dimension("1e2px"), Ok((100.0, "px")));
        assert_eq!(split_dimension("2em"), Ok((2.0, "em")));
        assert_eq!(split_dimension("3ex"), Ok((3.0, "ex")));
        assert_eq!(split_dimension("1E-1s"), Ok((0.1, "s")));
    }

    #[test]
    fn test_split_dimension_errors() {
        assert_eq!(
            split_dimension("px"),
            Err(ValueParseError::MissingNumber("px".to_string()))
        );
        assert_eq!(
            split_dimension("-"),
            Err(ValueParseError::MissingNumber("-".to_string()))
        );
        assert_eq!(
            split_dimension("1.2.3px"),
            Err(ValueParseError::InvalidNumber("1.2.3".to_string()))
        );
    }
}
