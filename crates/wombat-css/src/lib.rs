//! CSS value resolution for the Wombat engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Unit values** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Numbers, lengths, percentages, angles, times, frequencies
//!   - Conversion to canonical units (px, deg, s, Hz)
//!   - sRGB colors ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!
//! - **calc()** ([§ 10 Mathematical Expressions](https://www.w3.org/TR/css-values-4/#math))
//!   - Expression trees with a separate number-only grammar for divisors
//!   - Static type resolution
//!   - Evaluation against a layout context and percentage basis
//!   - Serialization
//!
//! - **Style values**
//!   - A tagged value type with typed `resolve_*` accessors
//!   - `<length-percentage>` and `<angle-percentage>`
//!   - `linear-gradient()`, `radial-gradient()` and `conic-gradient()`
//!     serialization and geometry
//!
//! # Not Yet Implemented
//!
//! - Parsing CSS text into expression trees
//! - min(), max(), clamp() and the trigonometric functions
//! - Color spaces other than sRGB

/// `<angle-percentage>` per [§ 6.1](https://www.w3.org/TR/css-values-4/#mixed-percentages).
pub mod angle_percentage;
/// calc() expressions per [§ 10 Mathematical Expressions](https://www.w3.org/TR/css-values-4/#math).
pub mod calc;
/// Gradient images per [CSS Images Level 3](https://www.w3.org/TR/css-images-3/#gradients).
pub mod gradient;
/// Inputs for resolving relative lengths.
pub mod layout_context;
/// `<length-percentage>` per [§ 6.1](https://www.w3.org/TR/css-values-4/#mixed-percentages).
pub mod length_percentage;
/// Parsed property values and their typed accessors.
pub mod style_value;
/// Unit value types per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use angle_percentage::AnglePercentage;
pub use calc::{
    CalcError, CalcNumberProduct, CalcNumberSum, CalcNumberValue, CalcProduct, CalcProductPart,
    CalcSum, CalcValue, CalculatedStyleValue, CalculationResult, PercentageBasis, ProductOperation,
    ResolvedType, SumOperation,
};
pub use gradient::{
    AngularColorStopListElement, ColorStop, ColorStopListElement, ConicGradient, EndingShape,
    Extent, GradientDirection, GradientType, HorizontalEdge, HorizontalPosition, HorizontalPreset,
    LinearColorStopListElement, LinearGradient, Position, RadialGradient, RadialGradientSize,
    SideOrCorner, VerticalEdge, VerticalPosition, VerticalPreset,
};
pub use layout_context::{DEFAULT_FONT_SIZE_PX, FontPixelMetrics, LayoutContext, Viewport};
pub use length_percentage::LengthPercentage;
pub use style_value::{StyleValue, StyleValueKind, StyleValueRef};
pub use values::{
    Angle, AngleUnit, Color, Frequency, FrequencyUnit, Length, LengthUnit, Number, NumberType,
    Percentage, Time, TimeUnit, ValueParseError,
};
