//! [§ 3.3 Conic Gradients](https://www.w3.org/TR/css-images-4/#conic-gradients)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AngularColorStopListElement, Position, write_color_stop_list};
use crate::angle_percentage::AnglePercentage;
use crate::layout_context::LayoutContext;
use crate::values::{Angle, AngleUnit};

/// A `conic-gradient()` image value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConicGradient {
    /// `repeating-conic-gradient()`
    pub repeating: bool,
    /// "The entire gradient is rotated by this angle."
    pub from_angle: Angle,
    /// The gradient's center.
    pub position: Position,
    /// The color stops, in order.
    pub color_stops: Vec<AngularColorStopListElement>,
}

impl ConicGradient {
    /// The rotation of the gradient in degrees; `0` starts at the top.
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.from_angle.to_degrees()
    }

    /// The gradient's center in px inside a `width` by `height` box.
    #[must_use]
    pub fn center(&self, context: &LayoutContext, width: f64, height: f64) -> Option<(f64, f64)> {
        self.position.resolved(context, width, height)
    }

    /// A stop position in degrees. "Percentages are relative to 360deg."
    #[must_use]
    pub fn stop_degrees(position: &AnglePercentage) -> Option<f64> {
        position.to_degrees(Angle::new(1.0, AngleUnit::Turn))
    }
}

impl fmt::Display for ConicGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeating {
            f.write_str("repeating-")?;
        }
        f.write_str("conic-gradient(")?;
        let has_from_angle = self.from_angle.to_degrees() != 0.0;
        let has_at_position = !self.position.is_center();
        if has_from_angle {
            write!(f, "from {}", self.from_angle)?;
        }
        if has_at_position {
            if has_from_angle {
                f.write_str(" ")?;
            }
            write!(f, "at {}", self.position)?;
        }
        if has_from_angle || has_at_position {
            f.write_str(", ")?;
        }
        write_color_stop_list(f, &self.color_stops)?;
        f.write_str(")")
    }
}
