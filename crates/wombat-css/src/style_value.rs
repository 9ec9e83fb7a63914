//! Style values
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! A [`StyleValue`] is the value of one property declaration after parsing.
//! Layout and paint read it through the `resolve_*` accessors, each of which
//! yields `None` when the value is of another type. A value is immutable and
//! shared as a [`StyleValueRef`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::Display;
use wombat_common::warning::warn_once;

use crate::calc::{CalculatedStyleValue, ResolvedType};
use crate::gradient::{ConicGradient, LinearGradient, RadialGradient};
use crate::layout_context::LayoutContext;
use crate::values::{Angle, Color, Frequency, Length, Number, Percentage, Time};

/// Shared ownership of an immutable style value.
pub type StyleValueRef = Arc<StyleValue>;

/// Which variant a [`StyleValue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StyleValueKind {
    /// [`StyleValue::Angle`]
    Angle,
    /// [`StyleValue::Calculated`]
    Calculated,
    /// [`StyleValue::Color`]
    Color,
    /// [`StyleValue::ConicGradient`]
    ConicGradient,
    /// [`StyleValue::Frequency`]
    Frequency,
    /// [`StyleValue::Identifier`]
    Identifier,
    /// [`StyleValue::Inherit`]
    Inherit,
    /// [`StyleValue::Initial`]
    Initial,
    /// [`StyleValue::Length`]
    Length,
    /// [`StyleValue::LinearGradient`]
    LinearGradient,
    /// [`StyleValue::Numeric`]
    Numeric,
    /// [`StyleValue::Percentage`]
    Percentage,
    /// [`StyleValue::RadialGradient`]
    RadialGradient,
    /// [`StyleValue::Time`]
    Time,
    /// [`StyleValue::Unset`]
    Unset,
}

/// A parsed CSS property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum StyleValue {
    /// An `<angle>`.
    Angle(Angle),
    /// A `calc()` expression.
    Calculated(CalculatedStyleValue),
    /// A `<color>`.
    Color(Color),
    /// A `conic-gradient()` image.
    ConicGradient(ConicGradient),
    /// A `<frequency>`.
    Frequency(Frequency),
    /// A keyword such as `auto` or `red`.
    Identifier(String),
    /// [§ 7.2 Explicit Inheritance](https://www.w3.org/TR/css-cascade-4/#inherit)
    Inherit,
    /// [§ 7.1 Resetting a Property](https://www.w3.org/TR/css-cascade-4/#initial)
    Initial,
    /// A `<length>`.
    Length(Length),
    /// A `linear-gradient()` image.
    LinearGradient(LinearGradient),
    /// A `<number>` or `<integer>`.
    Numeric(Number),
    /// A `<percentage>`.
    Percentage(Percentage),
    /// A `radial-gradient()` image.
    RadialGradient(RadialGradient),
    /// A `<time>`.
    Time(Time),
    /// [§ 7.3 Erasing All Declarations](https://www.w3.org/TR/css-cascade-4/#inherit-initial)
    Unset,
}

impl StyleValue {
    /// Which variant this is.
    #[must_use]
    pub const fn kind(&self) -> StyleValueKind {
        match self {
            Self::Angle(_) => StyleValueKind::Angle,
            Self::Calculated(_) => StyleValueKind::Calculated,
            Self::Color(_) => StyleValueKind::Color,
            Self::ConicGradient(_) => StyleValueKind::ConicGradient,
            Self::Frequency(_) => StyleValueKind::Frequency,
            Self::Identifier(_) => StyleValueKind::Identifier,
            Self::Inherit => StyleValueKind::Inherit,
            Self::Initial => StyleValueKind::Initial,
            Self::Length(_) => StyleValueKind::Length,
            Self::LinearGradient(_) => StyleValueKind::LinearGradient,
            Self::Numeric(_) => StyleValueKind::Numeric,
            Self::Percentage(_) => StyleValueKind::Percentage,
            Self::RadialGradient(_) => StyleValueKind::RadialGradient,
            Self::Time(_) => StyleValueKind::Time,
            Self::Unset => StyleValueKind::Unset,
        }
    }

    /// Move this value behind a [`StyleValueRef`].
    #[must_use]
    pub fn into_ref(self) -> StyleValueRef {
        Arc::new(self)
    }

    /// Whether this is one of the CSS-wide keywords.
    #[must_use]
    pub const fn is_css_wide_keyword(&self) -> bool {
        matches!(self, Self::Inherit | Self::Initial | Self::Unset)
    }

    /// The angle, if this is an angle value.
    #[must_use]
    pub const fn as_angle(&self) -> Option<Angle> {
        match self {
            Self::Angle(angle) => Some(*angle),
            _ => None,
        }
    }

    /// The expression, if this is a `calc()` value.
    #[must_use]
    pub const fn as_calculated(&self) -> Option<&CalculatedStyleValue> {
        match self {
            Self::Calculated(calculated) => Some(calculated),
            _ => None,
        }
    }

    /// The color, if this is a color value.
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// The gradient, if this is a conic gradient.
    #[must_use]
    pub const fn as_conic_gradient(&self) -> Option<&ConicGradient> {
        match self {
            Self::ConicGradient(gradient) => Some(gradient),
            _ => None,
        }
    }

    /// The keyword, if this is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(identifier) => Some(identifier.as_str()),
            _ => None,
        }
    }

    /// The length, if this is a length value.
    #[must_use]
    pub const fn as_length(&self) -> Option<Length> {
        match self {
            Self::Length(length) => Some(*length),
            _ => None,
        }
    }

    /// The gradient, if this is a linear gradient.
    #[must_use]
    pub const fn as_linear_gradient(&self) -> Option<&LinearGradient> {
        match self {
            Self::LinearGradient(gradient) => Some(gradient),
            _ => None,
        }
    }

    /// The percentage, if this is a percentage value.
    #[must_use]
    pub const fn as_percentage(&self) -> Option<Percentage> {
        match self {
            Self::Percentage(percentage) => Some(*percentage),
            _ => None,
        }
    }

    /// The gradient, if this is a radial gradient.
    #[must_use]
    pub const fn as_radial_gradient(&self) -> Option<&RadialGradient> {
        match self {
            Self::RadialGradient(gradient) => Some(gradient),
            _ => None,
        }
    }

    /// Whether this is one of the gradient images.
    #[must_use]
    pub const fn is_gradient(&self) -> bool {
        matches!(self, Self::ConicGradient(_) | Self::LinearGradient(_) | Self::RadialGradient(_))
    }

    /// [§ 4.4 Used Values](https://www.w3.org/TR/css-cascade-4/#used-value)
    ///
    /// The length in px. `auto` stays `auto`.
    #[must_use]
    pub fn resolve_length(&self, context: &LayoutContext) -> Option<Length> {
        match self {
            Self::Length(length) => Some(to_px_length(*length, context)),
            Self::Calculated(calculated) => calculated.resolve_length(context),
            _ => self.mismatch(StyleValueKind::Length),
        }
    }

    /// The length in px, with percentages taken of `basis`.
    #[must_use]
    pub fn resolve_length_percentage(
        &self,
        context: &LayoutContext,
        basis: Length,
    ) -> Option<Length> {
        match self {
            Self::Length(length) => Some(to_px_length(*length, context)),
            Self::Percentage(percentage) => {
                Some(to_px_length(basis.percentage_of(*percentage), context))
            }
            Self::Calculated(calculated) => calculated.resolve_length_percentage(context, basis),
            _ => self.mismatch(StyleValueKind::Length),
        }
    }

    /// The angle.
    #[must_use]
    pub fn resolve_angle(&self) -> Option<Angle> {
        match self {
            Self::Angle(angle) => Some(*angle),
            Self::Calculated(calculated) => calculated.resolve_angle(),
            _ => self.mismatch(StyleValueKind::Angle),
        }
    }

    /// The percentage.
    #[must_use]
    pub fn resolve_percentage(&self) -> Option<Percentage> {
        match self {
            Self::Percentage(percentage) => Some(*percentage),
            Self::Calculated(calculated) => calculated.resolve_percentage(),
            _ => self.mismatch(StyleValueKind::Percentage),
        }
    }

    /// The `<number>` value. Integers are numbers too.
    #[must_use]
    pub fn resolve_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(number) => Some(number.value()),
            Self::Calculated(calculated) => calculated.resolve_number(),
            _ => self.mismatch(StyleValueKind::Numeric),
        }
    }

    /// The `<integer>` value. A plain `<number>` literal is not an integer;
    /// a `calc()` producing a number is rounded.
    #[must_use]
    pub fn resolve_integer(&self) -> Option<i64> {
        match self {
            Self::Numeric(number) if number.is_integer() => Some(number.integer_value()),
            Self::Numeric(_) => None,
            Self::Calculated(calculated) => calculated.resolve_integer(),
            _ => self.mismatch(StyleValueKind::Numeric),
        }
    }

    /// The time.
    #[must_use]
    pub fn resolve_time(&self) -> Option<Time> {
        match self {
            Self::Time(time) => Some(*time),
            Self::Calculated(calculated) => calculated.resolve_time(),
            _ => self.mismatch(StyleValueKind::Time),
        }
    }

    /// The frequency.
    #[must_use]
    pub fn resolve_frequency(&self) -> Option<Frequency> {
        match self {
            Self::Frequency(frequency) => Some(*frequency),
            Self::Calculated(calculated) => calculated.resolve_frequency(),
            _ => self.mismatch(StyleValueKind::Frequency),
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The color, including identifiers that name a color.
    #[must_use]
    pub fn resolve_color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            Self::Identifier(name) => Color::from_named(name),
            _ => self.mismatch(StyleValueKind::Color),
        }
    }

    /// Whether resolving this value needs a percentage basis.
    #[must_use]
    pub fn contains_percentage(&self) -> bool {
        match self {
            Self::Percentage(_) => true,
            Self::Calculated(calculated) => calculated.contains_percentage(),
            _ => false,
        }
    }

    /// [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
    ///
    /// "relative values are absolutized". Relative lengths and length-typed
    /// `calc()` expressions without percentages become px lengths; every
    /// other value is returned unchanged.
    #[must_use]
    pub fn absolutized(&self, context: &LayoutContext) -> Self {
        match self {
            Self::Length(length) if !length.is_auto() && !length.is_px() => {
                Self::Length(Length::make_px(length.to_px(context)))
            }
            Self::Calculated(calculated)
                if calculated.resolved_type() == ResolvedType::Length
                    && !calculated.contains_percentage() =>
            {
                calculated
                    .resolve_length(context)
                    .map_or_else(|| self.clone(), Self::Length)
            }
            _ => self.clone(),
        }
    }

    fn mismatch<T>(&self, expected: StyleValueKind) -> Option<T> {
        if !self.is_css_wide_keyword() {
            warn_once(
                "CSS",
                &format!("cannot resolve a {} value as {expected}", self.kind()),
            );
        }
        None
    }
}

fn to_px_length(length: Length, context: &LayoutContext) -> Length {
    if length.is_auto() {
        length
    } else {
        Length::make_px(length.to_px(context))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(angle) => write!(f, "{angle}"),
            Self::Calculated(calculated) => write!(f, "{calculated}"),
            Self::Color(color) => f.write_str(&color.serialize_srgb()),
            Self::ConicGradient(gradient) => write!(f, "{gradient}"),
            Self::Frequency(frequency) => write!(f, "{frequency}"),
            Self::Identifier(identifier) => f.write_str(identifier),
            Self::Inherit => f.write_str("inherit"),
            Self::Initial => f.write_str("initial"),
            Self::Length(length) => write!(f, "{length}"),
            Self::LinearGradient(gradient) => write!(f, "{gradient}"),
            Self::Numeric(number) => write!(f, "{number}"),
            Self::Percentage(percentage) => write!(f, "{percentage}"),
            Self::RadialGradient(gradient) => write!(f, "{gradient}"),
            Self::Time(time) => write!(f, "{time}"),
            Self::Unset => f.write_str("unset"),
        }
    }
}
