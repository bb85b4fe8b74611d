use palette::{Clamp, FromColor, Hsl, Srgb};

use super::Color;

/// Hue/saturation/lightness triple: `h` in degrees `[0, 360)`, `s` and `l` in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    /// Hue angle in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl HslColor {
    /// Build an HSL triple, wrapping the hue and clamping saturation/lightness.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }
}

/// Wrap any angle into `[0, 360)`.
pub fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // `-1e-15 + 360.0` rounds to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed hue delta from `from` to `to`, normalized into `(-180, 180]` so a rotation by the
/// result always takes the shorter way around the wheel.
///
/// Grays have no hue, so the delta from or to an achromatic color is `0`.
pub fn hue_difference(from: Color, to: Color) -> f64 {
    if from.is_achromatic() || to.is_achromatic() {
        return 0.0;
    }
    let delta = (to.to_hsl().h - from.to_hsl().h) % 360.0;
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

impl Color {
    /// True when all three channels are equal (white, black and every gray).
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Convert to HSL. Achromatic colors report `h = 0`, `s = 0`.
    pub fn to_hsl(self) -> HslColor {
        if self.is_achromatic() {
            return HslColor {
                h: 0.0,
                s: 0.0,
                l: f64::from(self.r) / 255.0 * 100.0,
            };
        }
        let hsl: Hsl = Hsl::from_color(self.to_srgb());
        HslColor {
            h: normalize_hue(f64::from(hsl.hue.into_positive_degrees())),
            s: f64::from(hsl.saturation) * 100.0,
            l: f64::from(hsl.lightness) * 100.0,
        }
    }

    /// Convert an HSL triple back to the nearest 8-bit color.
    pub fn from_hsl(hsl: HslColor) -> Self {
        let hsl: Hsl = Hsl::new(
            normalize_hue(hsl.h) as f32,
            (hsl.s / 100.0) as f32,
            (hsl.l / 100.0) as f32,
        );
        Self::from_srgb(Srgb::from_color(hsl.clamp()).clamp())
    }

    /// Rotate the hue by `degrees`, preserving saturation and lightness.
    ///
    /// Callers skip literal white and black: their hue is undefined and a round trip through
    /// HSL would only add drift.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        let hsl = self.to_hsl();
        Self::from_hsl(HslColor {
            h: normalize_hue(hsl.h + degrees),
            ..hsl
        })
    }

    /// Scale every channel by `(100 + percent) / 100`, clamped to `[0, 255]`.
    ///
    /// Used for embossed shades, never on the scoring path.
    pub fn adjust_brightness(self, percent: f64) -> Self {
        let factor = (100.0 + percent) / 100.0;
        let scale = |channel: u8| (f64::from(channel) * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Quick perceived-brightness test: `(0.299 r + 0.587 g + 0.114 b) / 255 > 0.5`.
    ///
    /// This is a display heuristic only; contrast scoring goes through
    /// [`relative_luminance`](super::relative_luminance).
    pub fn is_light(self) -> bool {
        let weighted = 0.114f64.mul_add(
            f64::from(self.b),
            0.299f64.mul_add(f64::from(self.r), 0.587 * f64::from(self.g)),
        );
        weighted / 255.0 > 0.5
    }
}
