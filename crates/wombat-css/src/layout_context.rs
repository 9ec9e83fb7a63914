//! Layout-dependent inputs for resolving relative lengths.
//!
//! [§ 4.4 Used Values](https://www.w3.org/TR/css-cascade-4/#used-value)
//!
//! "The used value is the result of taking the computed value and completing
//! any remaining calculations to make it the absolute theoretical value."
//!
//! Resolution of font-relative and viewport-relative units happens when
//! converting computed values to used values, which requires the context
//! defined here. The context is borrowed for one resolution call and never
//! retained.

use serde::{Deserialize, Serialize};

/// User agent default font size.
///
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// "Initial: medium" - we define medium as 16px per common browser convention.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// Ratio of line height to font size used when no real font is available.
const APPROXIMATE_LINE_HEIGHT_RATIO: f64 = 1.2;

/// Ratio of x-height and '0' advance to font size used when no real font is available.
const APPROXIMATE_GLYPH_RATIO: f64 = 0.5;

/// Pixel metrics of the first available font, needed by `ex`, `ch` and `lh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontPixelMetrics {
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "ex: Equal to the used x-height of the first available font."
    pub x_height: f64,

    /// "ch: Equal to the used advance measure of the '0' (ZERO, U+0030) glyph
    /// in the font used to render it."
    pub zero_advance: f64,

    /// "lh: Equal to the computed value of the line-height property of the
    /// element on which it is used."
    pub line_height: f64,
}

impl FontPixelMetrics {
    /// Metrics estimated from the font size alone.
    ///
    /// [§ 5.1.1](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    ///
    /// "In the cases where it is impossible or impractical to determine the
    /// x-height, a value of 0.5em must be assumed." The same fallback is used
    /// for `ch`.
    #[must_use]
    pub fn approximate(font_size: f64) -> Self {
        Self {
            x_height: font_size * APPROXIMATE_GLYPH_RATIO,
            zero_advance: font_size * APPROXIMATE_GLYPH_RATIO,
            line_height: font_size * APPROXIMATE_LINE_HEIGHT_RATIO,
        }
    }
}

/// [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
///
/// "The viewport-percentage lengths are relative to the size of the
/// initial containing block."
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// Width of the initial containing block in px.
    pub width: f64,
    /// Height of the initial containing block in px.
    pub height: f64,
}

/// Context required to resolve relative CSS units to absolute pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    /// "em: Equal to the computed value of the font-size property of the element
    /// on which it is used."
    pub font_size: f64,

    /// "rem: Equal to the computed value of font-size on the root element."
    pub root_font_size: f64,

    /// Metrics of the element's first available font.
    pub font_metrics: FontPixelMetrics,

    /// "rlh: Equal to the value of the lh unit on the root element."
    pub root_line_height: f64,

    /// The initial containing block.
    pub viewport: Viewport,
}

impl LayoutContext {
    /// Create a context with all parameters specified.
    #[must_use]
    pub const fn new(
        font_size: f64,
        root_font_size: f64,
        font_metrics: FontPixelMetrics,
        root_line_height: f64,
        viewport: Viewport,
    ) -> Self {
        Self {
            font_size,
            root_font_size,
            font_metrics,
            root_line_height,
            viewport,
        }
    }

    /// Create a context with default font sizes (16px) and specified viewport.
    #[must_use]
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            viewport: Viewport { width, height },
            ..Self::default()
        }
    }

    /// Create a context with approximated font metrics for the given font sizes.
    #[must_use]
    pub fn with_font_sizes(font_size: f64, root_font_size: f64, viewport: Viewport) -> Self {
        Self {
            font_size,
            root_font_size,
            font_metrics: FontPixelMetrics::approximate(font_size),
            root_line_height: root_font_size * APPROXIMATE_LINE_HEIGHT_RATIO,
            viewport,
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::with_font_sizes(
            DEFAULT_FONT_SIZE_PX,
            DEFAULT_FONT_SIZE_PX,
            Viewport::default(),
        )
    }
}
