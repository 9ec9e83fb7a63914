//! [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::{LinearColorStopListElement, write_color_stop_list};
use crate::values::Angle;

/// Which syntax the gradient was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradientType {
    /// `linear-gradient()`
    #[default]
    Standard,
    /// `-webkit-linear-gradient()`. Directions name the starting side and
    /// omit the `to` keyword.
    WebKit,
}

/// [§ 3.1.1 linear-gradient() syntax](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
///
/// "`<side-or-corner> = [left | right] || [top | bottom]`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum SideOrCorner {
    /// `top`
    #[strum(to_string = "top")]
    Top,
    /// `bottom`
    #[strum(to_string = "bottom")]
    Bottom,
    /// `left`
    #[strum(to_string = "left")]
    Left,
    /// `right`
    #[strum(to_string = "right")]
    Right,
    /// `top left`
    #[strum(to_string = "top left")]
    TopLeft,
    /// `top right`
    #[strum(to_string = "top right")]
    TopRight,
    /// `bottom left`
    #[strum(to_string = "bottom left")]
    BottomLeft,
    /// `bottom right`
    #[strum(to_string = "bottom right")]
    BottomRight,
}

/// The direction of the gradient line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientDirection {
    /// Towards (or, for WebKit, from) a side or corner.
    SideOrCorner(SideOrCorner),
    /// "0deg points upward, and positive angles represent clockwise rotation."
    Angle(Angle),
}

/// A `linear-gradient()` image value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Standard or `-webkit-` prefixed syntax.
    pub gradient_type: GradientType,
    /// `repeating-linear-gradient()`
    pub repeating: bool,
    /// The gradient line's direction.
    pub direction: GradientDirection,
    /// The color stops, in order.
    pub color_stops: Vec<LinearColorStopListElement>,
}

impl LinearGradient {
    /// [§ 3.1.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
    ///
    /// The gradient line's angle in degrees for a gradient box of the given
    /// size.
    ///
    /// "If the argument instead specifies a corner of the box such as to top
    /// left, the gradient line must be angled such that it points into the
    /// same quadrant as the specified corner, and it is perpendicular to a
    /// line intersecting the two neighboring corners of the gradient box."
    #[must_use]
    pub fn angle_degrees(&self, width: f64, height: f64) -> f64 {
        let corner_angle = || height.atan2(width).to_degrees();
        match self.direction {
            GradientDirection::Angle(angle) => angle.to_degrees(),
            GradientDirection::SideOrCorner(side_or_corner) => {
                let angle = match side_or_corner {
                    SideOrCorner::Top => 0.0,
                    SideOrCorner::Bottom => 180.0,
                    SideOrCorner::Left => 270.0,
                    SideOrCorner::Right => 90.0,
                    SideOrCorner::TopRight => corner_angle(),
                    SideOrCorner::BottomLeft => corner_angle() + 180.0,
                    SideOrCorner::TopLeft => -corner_angle(),
                    SideOrCorner::BottomRight => -(corner_angle() + 180.0),
                };
                // WebKit directions name where the gradient starts.
                match self.gradient_type {
                    GradientType::Standard => angle,
                    GradientType::WebKit => angle + 180.0,
                }
            }
        }
    }
}

impl fmt::Display for LinearGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gradient_type == GradientType::WebKit {
            f.write_str("-webkit-")?;
        }
        if self.repeating {
            f.write_str("repeating-")?;
        }
        f.write_str("linear-gradient(")?;
        match (self.direction, self.gradient_type) {
            (GradientDirection::SideOrCorner(side), GradientType::Standard) => {
                write!(f, "to {side}, ")?;
            }
            (GradientDirection::SideOrCorner(side), GradientType::WebKit) => {
                write!(f, "{side}, ")?;
            }
            (GradientDirection::Angle(angle), _) => write!(f, "{angle}, ")?,
        }
        write_color_stop_list(f, &self.color_stops)?;
        f.write_str(")")
    }
}
