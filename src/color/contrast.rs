//! WCAG relative luminance and contrast ratio.
//!
//! Linearization uses the WCAG 2.0 `0.03928` knee. Scores computed here feed the palette
//! selector directly, so the formula must stay stable across releases.

use super::Color;

/// Linearize one normalized sRGB channel.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG: `0.2126 R + 0.7152 G + 0.0722 B` over linearized channels.
///
/// Returns a value in `[0.0, 1.0]`.
pub fn relative_luminance(color: Color) -> f64 {
    // Plain left-to-right sum keeps white at exactly 1.0.
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Symmetric in its arguments; ranges over `[1.0, 21.0]`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Worst-case contrast of `foreground` against any of `stops`.
///
/// An empty stop list has nothing to contrast against and yields the neutral ratio `1.0`.
pub fn min_contrast_over(foreground: Color, stops: &[Color]) -> f64 {
    stops
        .iter()
        .map(|stop| contrast_ratio(foreground, *stop))
        .reduce(f64::min)
        .unwrap_or(1.0)
}

/// Conservative contrast of `foreground` against a two-stop gradient: the smaller of the
/// ratios against either end.
pub fn gradient_contrast(foreground: Color, stop_a: Color, stop_b: Color) -> f64 {
    min_contrast_over(foreground, &[stop_a, stop_b])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(Color::BLACK), 0.0);
        assert_eq!(relative_luminance(Color::WHITE), 1.0);
    }

    #[test]
    fn luminance_primaries_match_weights() {
        assert!(approx_eq(relative_luminance(Color::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Color::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Color::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn low_channels_use_linear_segment() {
        // 10 / 255 = 0.0392 sits below the knee
        let lum = relative_luminance(Color::new(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12), "lum: {lum}");
    }

    #[test]
    fn white_on_black_is_exactly_21() {
        assert_eq!(contrast_ratio(Color::WHITE, Color::BLACK), 21.0);
        assert_eq!(contrast_ratio(Color::BLACK, Color::WHITE), 21.0);
    }

    #[test]
    fn same_color_is_1() {
        let c = Color::new(0x31, 0x82, 0xCE);
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn contrast_is_symmetric() {
        let samples = [
            Color::new(0x31, 0x82, 0xCE),
            Color::new(0x63, 0xB3, 0xED),
            Color::new(200, 30, 90),
            Color::new(17, 17, 17),
            Color::WHITE,
        ];
        for a in samples {
            for b in samples {
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
                let ratio = contrast_ratio(a, b);
                assert!((1.0..=21.0).contains(&ratio), "{a}/{b}: {ratio}");
            }
        }
    }

    #[test]
    fn gradient_contrast_takes_worst_stop() {
        let fg = Color::WHITE;
        let dark = Color::new(0x1A, 0x20, 0x2C);
        let light = Color::new(0x63, 0xB3, 0xED);
        let expected = contrast_ratio(fg, light);
        assert!(expected < contrast_ratio(fg, dark));
        assert_eq!(gradient_contrast(fg, dark, light), expected);
        assert_eq!(gradient_contrast(fg, light, dark), expected);
    }

    #[test]
    fn min_contrast_over_generalizes_to_many_stops() {
        let fg = Color::BLACK;
        let stops = [Color::WHITE, Color::new(128, 128, 128), Color::new(40, 40, 40)];
        assert_eq!(
            min_contrast_over(fg, &stops),
            contrast_ratio(fg, Color::new(40, 40, 40))
        );
        assert_eq!(min_contrast_over(fg, &[]), 1.0);
    }
}
