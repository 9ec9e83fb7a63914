//! CSS Length values
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use wombat_common::warning::warn_once;

use super::{Percentage, ValueParseError, parse_unit, split_dimension};
use crate::layout_context::LayoutContext;

/// CSS pixels per inch.
///
/// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
/// "1in = 2.54cm = 96px"
const PX_PER_INCH: f64 = 96.0;

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// The unit a [`Length`] was written in. `Auto` is not a CSS unit; it marks
/// the `auto` keyword where a property accepts `auto | <length>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
    /// "1cm = 96px/2.54"
    Cm,
    /// "1mm = 1/10th of 1cm"
    Mm,
    /// "1Q = 1/40th of 1cm"
    #[strum(serialize = "Q")]
    Q,
    /// "1in = 2.54cm = 96px"
    In,
    /// "1pt = 1/72nd of 1in"
    Pt,
    /// "1pc = 1/6th of 1in"
    Pc,
    /// [§ 6.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element
    /// on which it is used."
    Em,
    /// "Equal to the computed value of font-size on the root element."
    Rem,
    /// "Equal to the used x-height of the first available font."
    Ex,
    /// "Equal to the used advance measure of the '0' glyph."
    Ch,
    /// "Equal to the computed value of the line-height property."
    Lh,
    /// "Equal to the value of the lh unit on the root element."
    Rlh,
    /// [§ 6.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    /// "1vw = 1% of viewport width"
    Vw,
    /// "1vh = 1% of viewport height"
    Vh,
    /// "Equal to the smaller of vw or vh."
    Vmin,
    /// "Equal to the larger of vw or vh."
    Vmax,
    /// The `auto` keyword.
    Auto,
}

impl LengthUnit {
    /// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// Pixels per one of this unit, for absolute units only.
    #[must_use]
    pub const fn px_per_unit(self) -> Option<f64> {
        match self {
            Self::Px => Some(1.0),
            Self::Cm => Some(PX_PER_INCH / 2.54),
            Self::Mm => Some(PX_PER_INCH / 25.4),
            Self::Q => Some(PX_PER_INCH / 101.6),
            Self::In => Some(PX_PER_INCH),
            Self::Pt => Some(PX_PER_INCH / 72.0),
            Self::Pc => Some(PX_PER_INCH / 6.0),
            _ => None,
        }
    }

    /// [§ 6.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    #[must_use]
    pub const fn is_font_relative(self) -> bool {
        matches!(
            self,
            Self::Em | Self::Rem | Self::Ex | Self::Ch | Self::Lh | Self::Rlh
        )
    }

    /// [§ 6.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    #[must_use]
    pub const fn is_viewport_relative(self) -> bool {
        matches!(self, Self::Vw | Self::Vh | Self::Vmin | Self::Vmax)
    }
}

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Create a length with an explicit unit.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Create a length in CSS pixels.
    #[must_use]
    pub const fn make_px(px: f64) -> Self {
        Self::new(px, LengthUnit::Px)
    }

    /// [§ 4.4 Automatic values](https://www.w3.org/TR/CSS2/cascade.html#value-def-auto)
    ///
    /// "Some properties can take the keyword 'auto' as a value."
    #[must_use]
    pub const fn make_auto() -> Self {
        Self::new(0.0, LengthUnit::Auto)
    }

    /// The magnitude as written, in [`Self::unit`].
    #[must_use]
    pub const fn raw_value(&self) -> f64 {
        self.value
    }

    /// The unit this length was written in.
    #[must_use]
    pub const fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Check if the value is 'auto'.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self.unit, LengthUnit::Auto)
    }

    /// Whether this length is already in CSS pixels.
    #[must_use]
    pub const fn is_px(&self) -> bool {
        matches!(self.unit, LengthUnit::Px)
    }

    /// Whether this length converts to px without a layout context.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.unit.px_per_unit().is_some()
    }

    /// Whether this length depends on font metrics or the viewport.
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.unit.is_font_relative() || self.unit.is_viewport_relative()
    }

    /// [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    ///
    /// The value in px for absolute units, `None` for relative units and `auto`.
    #[must_use]
    pub fn absolute_length_to_px(&self) -> Option<f64> {
        self.unit.px_per_unit().map(|ratio| self.value * ratio)
    }

    /// [§ 4.4 Used Values](https://www.w3.org/TR/css-cascade-4/#used-value)
    ///
    /// Resolve this length to an absolute pixel value using the provided context.
    ///
    /// NOTE: 'auto' resolves to 0.0 here. The actual used value of an `auto`
    /// length depends on the layout algorithm that consumes it.
    #[must_use]
    pub fn to_px(&self, context: &LayoutContext) -> f64 {
        let viewport = context.viewport;
        match self.unit {
            // [§ 6.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
            LengthUnit::Em => self.value * context.font_size,
            LengthUnit::Rem => self.value * context.root_font_size,
            LengthUnit::Ex => self.value * context.font_metrics.x_height,
            LengthUnit::Ch => self.value * context.font_metrics.zero_advance,
            LengthUnit::Lh => self.value * context.font_metrics.line_height,
            LengthUnit::Rlh => self.value * context.root_line_height,
            // [§ 6.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
            LengthUnit::Vw => self.value * viewport.width / 100.0,
            LengthUnit::Vh => self.value * viewport.height / 100.0,
            LengthUnit::Vmin => self.value * viewport.width.min(viewport.height) / 100.0,
            LengthUnit::Vmax => self.value * viewport.width.max(viewport.height) / 100.0,
            LengthUnit::Auto => 0.0,
            // [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
            LengthUnit::Px
            | LengthUnit::Cm
            | LengthUnit::Mm
            | LengthUnit::Q
            | LengthUnit::In
            | LengthUnit::Pt
            | LengthUnit::Pc => self.absolute_length_to_px().unwrap_or_default(),
        }
    }

    /// [§ 5.5 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// "Percentage values are always relative to another quantity, for example
    /// a length."
    ///
    /// This length scaled by the percentage, keeping its unit. A percentage of
    /// `auto` is still `auto`.
    #[must_use]
    pub fn percentage_of(&self, percentage: Percentage) -> Self {
        if self.is_auto() {
            warn_once("CSS", "percentage of an 'auto' length; keeping 'auto'");
            return *self;
        }
        Self::new(self.value * percentage.as_fraction(), self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            return f.write_str("auto");
        }
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Length {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::make_auto());
        }
        let (value, unit) = split_dimension(s)?;
        // [§ 6 Distance Units]
        // "for zero lengths the unit identifier is optional"
        if unit.is_empty() && value.abs() < f64::EPSILON {
            return Ok(Self::make_px(0.0));
        }
        let unit: LengthUnit = parse_unit("length", unit)?;
        if unit == LengthUnit::Auto {
            return Err(ValueParseError::UnknownUnit {
                kind: "length",
                unit: unit.to_string(),
            });
        }
        Ok(Self::new(value, unit))
    }
}
