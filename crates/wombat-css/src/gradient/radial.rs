//! [§ 3.2 Radial Gradients](https://www.w3.org/TR/css-images-3/#radial-gradients)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::{LinearColorStopListElement, Position, write_color_stop_list};
use crate::layout_context::LayoutContext;
use crate::length_percentage::LengthPercentage;
use crate::values::Length;

/// Stand-in for a zero radius, so a degenerate gradient keeps its shape.
const ARBITRARY_SMALL_NUMBER: f64 = 1e-10;

/// Stand-in for an infinite radius.
const ARBITRARY_LARGE_NUMBER: f64 = 1e10;

/// "`<ending-shape> = circle | ellipse`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EndingShape {
    /// `circle`
    Circle,
    /// `ellipse`, the initial shape.
    #[default]
    Ellipse,
}

/// [§ 3.2.1](https://www.w3.org/TR/css-images-3/#radial-size)
///
/// "`<radial-extent> = closest-corner | closest-side | farthest-corner |
/// farthest-side`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Extent {
    /// "The ending shape is sized so that it passes through the corner of the
    /// gradient box closest to the gradient's center."
    ClosestCorner,
    /// "The ending shape is sized so that it exactly meets the side of the
    /// gradient box closest to the gradient's center."
    ClosestSide,
    /// "Same as closest-corner, except the ending shape is sized based on the
    /// farthest corner."
    FarthestCorner,
    /// "Same as closest-side, except the ending shape is sized based on the
    /// farthest side(s)."
    FarthestSide,
}

/// The size of the ending shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialGradientSize {
    /// A keyword size.
    Extent(Extent),
    /// "`<length [0,∞]>`: Gives the radius of the circle explicitly."
    Circle {
        /// The radius.
        radius: Length,
    },
    /// "`<length-percentage [0,∞]>{2}`: Gives the size of the ellipse
    /// explicitly."
    Ellipse {
        /// The horizontal semi-axis; percentages are of the box width.
        radius_a: LengthPercentage,
        /// The vertical semi-axis; percentages are of the box height.
        radius_b: LengthPercentage,
    },
}

/// A `radial-gradient()` image value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// `repeating-radial-gradient()`
    pub repeating: bool,
    /// Circle or ellipse.
    pub ending_shape: EndingShape,
    /// How large the ending shape is.
    pub size: RadialGradientSize,
    /// The gradient's center.
    pub position: Position,
    /// The color stops, in order.
    pub color_stops: Vec<LinearColorStopListElement>,
}

impl RadialGradient {
    /// The gradient's center in px inside a `width` by `height` box.
    #[must_use]
    pub fn center(&self, context: &LayoutContext, width: f64, height: f64) -> Option<(f64, f64)> {
        self.position.resolved(context, width, height)
    }

    /// The horizontal and vertical radii of the ending shape in px, for a
    /// gradient box of the given size.
    ///
    /// [Degenerate Radial Gradients](https://www.w3.org/TR/css-images-3/#degenerate-radials)
    ///
    /// Zero-sized shapes are replaced by very small or very large radii, so
    /// the result is always positive.
    #[must_use]
    pub fn resolved_size(
        &self,
        context: &LayoutContext,
        width: f64,
        height: f64,
    ) -> Option<(f64, f64)> {
        let center = self.center(context, width, height)?;
        let (radius_x, radius_y) = match &self.size {
            RadialGradientSize::Extent(Extent::ClosestSide) => {
                self.side_shape(center, width, height, f64::min)
            }
            RadialGradientSize::Extent(Extent::FarthestSide) => {
                self.side_shape(center, width, height, f64::max)
            }
            RadialGradientSize::Extent(Extent::ClosestCorner) => {
                self.corner_shape(center, width, height, false)
            }
            RadialGradientSize::Extent(Extent::FarthestCorner) => {
                self.corner_shape(center, width, height, true)
            }
            RadialGradientSize::Circle { radius } => {
                let radius = radius.to_px(context);
                (radius, radius)
            }
            RadialGradientSize::Ellipse { radius_a, radius_b } => (
                radius_a.to_px(context, Length::make_px(width))?,
                radius_b.to_px(context, Length::make_px(height))?,
            ),
        };

        // "If the ending shape is a circle with zero radius"
        if self.ending_shape == EndingShape::Circle && (radius_x <= 0.0 || radius_y <= 0.0) {
            return Some((ARBITRARY_SMALL_NUMBER, ARBITRARY_SMALL_NUMBER));
        }
        // "If the ending shape has zero width (regardless of the height)"
        if radius_x <= 0.0 {
            return Some((ARBITRARY_SMALL_NUMBER, ARBITRARY_LARGE_NUMBER));
        }
        // "Otherwise, if the ending shape has zero height"
        if radius_y <= 0.0 {
            return Some((ARBITRARY_LARGE_NUMBER, ARBITRARY_SMALL_NUMBER));
        }
        Some((radius_x, radius_y))
    }

    /// Distances from the center to the nearest (or farthest) vertical and
    /// horizontal sides, picked by `pick`.
    fn side_shape(
        &self,
        (center_x, center_y): (f64, f64),
        width: f64,
        height: f64,
        pick: fn(f64, f64) -> f64,
    ) -> (f64, f64) {
        let x = pick(center_x.abs(), (width - center_x).abs());
        let y = pick(center_y.abs(), (height - center_y).abs());
        match self.ending_shape {
            EndingShape::Circle => {
                let radius = pick(x, y);
                (radius, radius)
            }
            EndingShape::Ellipse => (x, y),
        }
    }

    /// "If the shape is an ellipse, the ending shape is given the same
    /// aspect-ratio it would have if closest-side [or farthest-side] were
    /// specified."
    fn corner_shape(
        &self,
        (center_x, center_y): (f64, f64),
        width: f64,
        height: f64,
        farthest: bool,
    ) -> (f64, f64) {
        let distance = |(x, y): (f64, f64)| (x - center_x).hypot(y - center_y);
        let corners = [(width, 0.0), (width, height), (0.0, height)];
        let (corner_x, corner_y) = corners.into_iter().fold((0.0, 0.0), |best, corner| {
            let better = if farthest {
                distance(corner) > distance(best)
            } else {
                distance(corner) < distance(best)
            };
            if better { corner } else { best }
        });

        match self.ending_shape {
            EndingShape::Circle => {
                let radius = distance((corner_x, corner_y));
                (radius, radius)
            }
            EndingShape::Ellipse => {
                let pick: fn(f64, f64) -> f64 = if farthest { f64::max } else { f64::min };
                let (side_x, side_y) = self.side_shape((center_x, center_y), width, height, pick);
                if side_x <= 0.0 || side_y <= 0.0 {
                    return (side_x, side_y);
                }
                let aspect_ratio = side_x / side_y;
                let radius_a = ((corner_y - center_y) * aspect_ratio).hypot(corner_x - center_x);
                (radius_a, radius_a / aspect_ratio)
            }
        }
    }
}

impl fmt::Display for RadialGradientSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extent(extent) => write!(f, "{extent}"),
            Self::Circle { radius } => write!(f, "{radius}"),
            Self::Ellipse { radius_a, radius_b } => write!(f, "{radius_a} {radius_b}"),
        }
    }
}

impl fmt::Display for RadialGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        write!(f, "radial-gradient({} {}", self.ending_shape, self.size)?;
        if !self.position.is_center() {
            write!(f, " at {}", self.position)?;
        }
        f.write_str(", ")?;
        write_color_stop_list(f, &self.color_stops)?;
        f.write_str(")")
    }
}
