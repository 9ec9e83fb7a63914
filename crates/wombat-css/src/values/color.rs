//! CSS Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValueParseError;

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The basic 16 HTML colors plus their common aliases.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("lime", [0, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("teal", [0, 128, 128]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black (#000000)
    #[must_use]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// White (#ffffff)
    #[must_use]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// [§ 6.3 transparent](https://www.w3.org/TR/css-color-4/#transparent-color)
    ///
    /// "The keyword transparent specifies a transparent black."
    #[must_use]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// "The syntax of a `<hex-color>` is a `<hash-token>` token whose value
    /// consists of 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channels: Vec<u8> = match hex.len() {
            // "The three-digit RGB notation (#RGB) is converted into six-digit
            // form (#RRGGBB) by replicating digits, not by adding zeros."
            3 | 4 => (0..hex.len())
                .map(|i| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok())
                .collect::<Option<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
                .collect::<Option<_>>()?,
            _ => return None,
        };
        match channels[..] {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::rgba(r, g, b, a)),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// "CSS defines a large set of named colors..." Only the basic set and
    /// `transparent` are recognized.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self::transparent());
        }
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, [r, g, b])| Self::rgb(r, g, b))
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    ///
    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// [CSSOM § 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
    ///
    /// "If the value is an sRGB color with alpha 1, `rgb(r, g, b)`; otherwise
    /// `rgba(r, g, b, alpha)`."
    #[must_use]
    pub fn serialize_srgb(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                serialize_alpha(self.a)
            )
        }
    }
}

/// [§ 18.2 Serializing alpha values](https://www.w3.org/TR/css-color-4/#serializing-alpha-values)
///
/// "the value is rounded to the nearest value with two decimal places that
/// round-trips to the same 8-bit alpha; if none exists, three decimal places
/// are used."
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn serialize_alpha(alpha: u8) -> f64 {
    let fraction = f64::from(alpha) / 255.0;
    let two_places = (fraction * 100.0).round() / 100.0;
    if (two_places * 255.0).round() as u8 == alpha {
        two_places
    } else {
        (fraction * 1000.0).round() / 1000.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize_srgb())
    }
}

impl FromStr for Color {
    type Err = ValueParseError;

    /// Accepts `#hex` notation or a recognized color keyword.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let color = if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_named(s)
        };
        color.ok_or_else(|| ValueParseError::UnknownUnit {
            kind: "color",
            unit: s.to_string(),
        })
    }
}
