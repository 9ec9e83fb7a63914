//! Gradient images
//!
//! [CSS Images Level 3 § 3 Gradients](https://www.w3.org/TR/css-images-3/#gradients)
//!
//! Only serialization and gradient geometry live here; rasterization is the
//! painter's job.

mod conic;
mod linear;
mod position;
mod radial;

pub use conic::ConicGradient;
pub use linear::{GradientDirection, GradientType, LinearGradient, SideOrCorner};
pub use position::{
    HorizontalEdge, HorizontalPosition, HorizontalPreset, Position, VerticalEdge,
    VerticalPosition, VerticalPreset,
};
pub use radial::{EndingShape, Extent, RadialGradient, RadialGradientSize};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::angle_percentage::AnglePercentage;
use crate::length_percentage::LengthPercentage;
use crate::values::Color;

/// [§ 3.4.1 Color Stop Lists](https://www.w3.org/TR/css-images-4/#color-stop-syntax)
///
/// "`<linear-color-stop> = <color> <length-percentage>{1,2}?`"
///
/// "`<angular-color-stop> = <color> <angle-percentage>{1,2}?`"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop<P = LengthPercentage> {
    /// The stop's color.
    pub color: Color,
    /// Where the stop sits on the gradient line.
    pub position: Option<P>,
    /// "A color stop with two positions is equivalent to two color stops
    /// with the same color."
    pub second_position: Option<P>,
}

/// A color stop, optionally preceded by a color hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStopListElement<P = LengthPercentage> {
    /// "`<linear-color-hint> = <length-percentage>`"
    pub transition_hint: Option<P>,
    /// The stop itself.
    pub color_stop: ColorStop<P>,
}

/// A stop of a linear or radial gradient.
pub type LinearColorStopListElement = ColorStopListElement<LengthPercentage>;

/// A stop of a conic gradient. Percentages are of one full turn.
pub type AngularColorStopListElement = ColorStopListElement<AnglePercentage>;

impl<P: fmt::Display> fmt::Display for ColorStopListElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(hint) = &self.transition_hint {
            write!(f, "{hint}, ")?;
        }
        f.write_str(&self.color_stop.color.serialize_srgb())?;
        for position in [&self.color_stop.position, &self.color_stop.second_position]
            .into_iter()
            .flatten()
        {
            write!(f, " {position}")?;
        }
        Ok(())
    }
}

/// Write `stops` separated by `, `.
fn write_color_stop_list<P: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    stops: &[ColorStopListElement<P>],
) -> fmt::Result {
    for (index, element) in stops.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }
    Ok(())
}
