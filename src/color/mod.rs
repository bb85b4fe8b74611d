//! Color primitives shared by every generator: the 8-bit RGB [`Color`], its `#RRGGBB` codec,
//! HSL conversion helpers and the WCAG contrast scorer.

pub mod contrast;
mod convert;

use std::{fmt, str::FromStr};

use palette::Srgb;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::ColorError;

pub use self::contrast::{
    contrast_ratio, gradient_contrast, min_contrast_over, relative_luminance,
};
pub use self::convert::{HslColor, hue_difference, normalize_hue};

/// An 8-bit-per-channel sRGB color.
///
/// Parses from `#RRGGBB` (case-insensitive, leading `#` optional) and always prints the
/// canonical uppercase form, which is also its serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Build a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        hex.parse()
    }

    /// Encode as canonical uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// True for the two literal achromatic extremes, which generators never recolor.
    pub fn is_white_or_black(self) -> bool {
        self == Self::WHITE || self == Self::BLACK
    }

    /// Normalized floating-point view used for color-space math.
    pub(crate) fn to_srgb(self) -> Srgb {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Quantize a floating-point sRGB value back to 8 bits, rounding to nearest.
    pub(crate) fn from_srgb(rgb: Srgb) -> Self {
        let rgb: Srgb<u8> = rgb.into_format();
        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit(s.to_owned()));
        }
        if digits.len() != 6 {
            return Err(ColorError::InvalidHexLength(digits.len()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHexDigit(s.to_owned()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
