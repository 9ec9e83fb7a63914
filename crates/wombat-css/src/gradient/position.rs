//! [§ 3.8 `<position>`](https://www.w3.org/TR/css-values-4/#position)
//!
//! The center of a radial or conic gradient.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::layout_context::LayoutContext;
use crate::length_percentage::LengthPercentage;
use crate::values::Length;

/// A horizontal position keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPreset {
    /// `left`, 0%
    Left,
    /// `center`, 50%
    Center,
    /// `right`, 100%
    Right,
}

/// A vertical position keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerticalPreset {
    /// `top`, 0%
    Top,
    /// `center`, 50%
    Center,
    /// `bottom`, 100%
    Bottom,
}

impl HorizontalPreset {
    /// The keyword as a fraction of the box width.
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 0.5,
            Self::Right => 1.0,
        }
    }
}

impl VerticalPreset {
    /// The keyword as a fraction of the box height.
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// The edge a horizontal offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    /// Offsets grow rightwards from the left edge.
    #[default]
    Left,
    /// Offsets grow leftwards from the right edge.
    Right,
}

/// The edge a vertical offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    /// Offsets grow downwards from the top edge.
    #[default]
    Top,
    /// Offsets grow upwards from the bottom edge.
    Bottom,
}

/// The horizontal component of a [`Position`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalPosition {
    /// A keyword.
    Preset(HorizontalPreset),
    /// A `<length-percentage>` of the box width.
    Offset(LengthPercentage),
}

/// The vertical component of a [`Position`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    /// A keyword.
    Preset(VerticalPreset),
    /// A `<length-percentage>` of the box height.
    Offset(LengthPercentage),
}

/// A point inside a box, as written in CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// The horizontal keyword or offset.
    pub horizontal: HorizontalPosition,
    /// The vertical keyword or offset.
    pub vertical: VerticalPosition,
    /// The edge the horizontal offset is measured from.
    #[serde(default)]
    pub x_relative_to: HorizontalEdge,
    /// The edge the vertical offset is measured from.
    #[serde(default)]
    pub y_relative_to: VerticalEdge,
}

impl Position {
    /// `center center`, the default gradient center.
    #[must_use]
    pub const fn center() -> Self {
        Self {
            horizontal: HorizontalPosition::Preset(HorizontalPreset::Center),
            vertical: VerticalPosition::Preset(VerticalPreset::Center),
            x_relative_to: HorizontalEdge::Left,
            y_relative_to: VerticalEdge::Top,
        }
    }

    /// Whether this is exactly `center center`. Gradients omit the
    /// `at <position>` clause in that case.
    #[must_use]
    pub fn is_center(&self) -> bool {
        *self == Self::center()
    }

    /// The point in px, relative to the top left corner of a `width` by
    /// `height` box. Percentages are of the box width and height.
    ///
    /// `None` when an offset is a `calc()` that is not a length.
    #[must_use]
    pub fn resolved(&self, context: &LayoutContext, width: f64, height: f64) -> Option<(f64, f64)> {
        let x = match &self.horizontal {
            HorizontalPosition::Preset(preset) => width * preset.fraction(),
            HorizontalPosition::Offset(offset) => offset.to_px(context, Length::make_px(width))?,
        };
        let y = match &self.vertical {
            VerticalPosition::Preset(preset) => height * preset.fraction(),
            VerticalPosition::Offset(offset) => offset.to_px(context, Length::make_px(height))?,
        };
        let x = match self.x_relative_to {
            HorizontalEdge::Left => x,
            HorizontalEdge::Right => width - x,
        };
        let y = match self.y_relative_to {
            VerticalEdge::Top => y,
            VerticalEdge::Bottom => height - y,
        };
        Some((x, y))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::center()
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "{preset}"),
            Self::Offset(offset) => write!(f, "{offset}"),
        }
    }
}

impl fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(preset) => write!(f, "{preset}"),
            Self::Offset(offset) => write!(f, "{offset}"),
        }
    }
}

impl fmt::Display for Position {
    /// Edges are only written when one of them is not the default, so
    /// `left 10px top 20px` serializes as `10px 20px`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_relative_edges = self.x_relative_to == HorizontalEdge::Right
            || self.y_relative_to == VerticalEdge::Bottom;
        if has_relative_edges {
            write!(f, "{} ", self.x_relative_to)?;
        }
        write!(f, "{} ", self.horizontal)?;
        if has_relative_edges {
            write!(f, "{} ", self.y_relative_to)?;
        }
        write!(f, "{}", self.vertical)
    }
}
