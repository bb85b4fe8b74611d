//! Extended variations: twelve named harmony styles derived from a single base color.
//!
//! Each style name maps to an archetype (contrast, analog, complementary, monochromatic, or the
//! triadic default) that fixes the accent/secondary/background hue shifts. Backgrounds are kept
//! desaturated and light so they work as a backdrop.

use crate::{
    color::{Color, HslColor},
    model::{BackgroundSpec, LogoVariation},
};

/// Backgrounds never exceed this saturation, in percent.
pub const BACKGROUND_MAX_SATURATION: f64 = 30.0;

/// Hue-shift pattern of an extended style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyArchetype {
    /// Opposite accent, 120° secondary.
    Contrast,
    /// Neighbouring hues.
    Analog,
    /// Opposite accent, 150° secondary.
    Complementary,
    /// Single hue.
    Monochromatic,
    /// Three evenly spaced hues; used for any unrecognized style.
    Triadic,
}

/// Degrees added to the base hue for each derived role, plus the fixed background lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyShifts {
    /// Accent hue shift.
    pub accent: f64,
    /// Secondary hue shift.
    pub secondary: f64,
    /// Background hue shift.
    pub background: f64,
    /// Background lightness in percent.
    pub background_lightness: f64,
}

impl HarmonyArchetype {
    /// Classify a style by the archetype keyword in its name (English or German spelling).
    pub fn classify(style_name: &str) -> Self {
        let contains = |needles: &[&str]| needles.iter().any(|needle| style_name.contains(needle));
        if contains(&["Contrast", "Kontrast"]) {
            Self::Contrast
        } else if contains(&["Analog"]) {
            Self::Analog
        } else if contains(&["Complementary", "Komplementär"]) {
            Self::Complementary
        } else if contains(&["Monochromatic", "Monochromatisch"]) {
            Self::Monochromatic
        } else {
            Self::Triadic
        }
    }

    /// Shift table of the archetype.
    pub fn shifts(self) -> HarmonyShifts {
        let (accent, secondary, background, background_lightness) = match self {
            Self::Contrast => (180.0, 120.0, 0.0, 90.0),
            Self::Analog => (30.0, 60.0, -30.0, 85.0),
            Self::Complementary => (180.0, 150.0, 0.0, 92.0),
            Self::Monochromatic => (0.0, 0.0, 0.0, 88.0),
            Self::Triadic => (120.0, 240.0, 0.0, 87.0),
        };
        HarmonyShifts {
            accent,
            secondary,
            background,
            background_lightness,
        }
    }
}

/// Which derived color takes the brand name and which the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleLayout {
    /// Brand = base, icon = accent.
    Standard,
    /// Brand = accent, icon = base.
    Swapped,
}

/// A named extended style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendedStyle {
    /// Display name; its archetype keyword selects the shift table.
    pub name: &'static str,
    /// Role assignment of base and accent.
    pub layout: RoleLayout,
    /// Brightness adjustment applied to the slogan, in percent (negative embosses darker).
    pub slogan_shade: f64,
}

const fn style(name: &'static str, layout: RoleLayout, slogan_shade: f64) -> ExtendedStyle {
    ExtendedStyle {
        name,
        layout,
        slogan_shade,
    }
}

/// The twelve extended styles, in output order.
pub const EXTENDED_STYLES: [ExtendedStyle; 12] = [
    style("Bold Contrast", RoleLayout::Standard, 0.0),
    style("Soft Contrast", RoleLayout::Swapped, 0.0),
    style("Warm Analog", RoleLayout::Standard, 0.0),
    style("Cool Analog", RoleLayout::Swapped, 0.0),
    style("Vivid Complementary", RoleLayout::Standard, 0.0),
    style("Muted Complementary", RoleLayout::Swapped, -25.0),
    style("Pure Monochromatic", RoleLayout::Standard, 0.0),
    style("Deep Monochromatic", RoleLayout::Standard, -35.0),
    style("Balanced Triad", RoleLayout::Standard, 0.0),
    style("Playful Triad", RoleLayout::Swapped, 0.0),
    style("Classic Harmony", RoleLayout::Standard, -30.0),
    style("Modern Harmony", RoleLayout::Swapped, -30.0),
];

/// Colors derived from a base color by one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonyColors {
    /// The base color itself.
    pub base: Color,
    /// Base rotated by the accent shift.
    pub accent: Color,
    /// Base rotated by the secondary shift.
    pub secondary: Color,
    /// Light, desaturated backdrop.
    pub background: Color,
}

/// Derive accent, secondary and background colors for `archetype`.
pub fn derive_harmony(base: Color, archetype: HarmonyArchetype) -> HarmonyColors {
    let shifts = archetype.shifts();
    let hsl = base.to_hsl();
    let background = Color::from_hsl(HslColor::new(
        hsl.h + shifts.background,
        hsl.s.min(BACKGROUND_MAX_SATURATION),
        shifts.background_lightness,
    ));
    HarmonyColors {
        base,
        accent: base.rotate_hue(shifts.accent),
        secondary: base.rotate_hue(shifts.secondary),
        background,
    }
}

/// Build one variation per [`EXTENDED_STYLES`] entry.
pub fn extended_variations(base: Color) -> Vec<LogoVariation> {
    EXTENDED_STYLES
        .iter()
        .map(|style| {
            let colors = derive_harmony(base, HarmonyArchetype::classify(style.name));
            let (brand, icon) = match style.layout {
                RoleLayout::Standard => (colors.base, colors.accent),
                RoleLayout::Swapped => (colors.accent, colors.base),
            };
            LogoVariation::new(
                format!("Harmony - {}", style.name),
                brand,
                icon,
                BackgroundSpec::Solid(colors.background),
                colors.secondary.adjust_brightness(style.slogan_shade),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::new(0x31, 0x82, 0xCE);

    fn hue_gap(a: Color, b: Color) -> f64 {
        let gap = (a.to_hsl().h - b.to_hsl().h).rem_euclid(360.0);
        gap.min(360.0 - gap)
    }

    #[test]
    fn classify_by_keyword() {
        assert_eq!(HarmonyArchetype::classify("Bold Contrast"), HarmonyArchetype::Contrast);
        assert_eq!(HarmonyArchetype::classify("Warm Analog"), HarmonyArchetype::Analog);
        assert_eq!(
            HarmonyArchetype::classify("Komplementär Klar"),
            HarmonyArchetype::Complementary
        );
        assert_eq!(
            HarmonyArchetype::classify("Monochromatisch"),
            HarmonyArchetype::Monochromatic
        );
        assert_eq!(HarmonyArchetype::classify("Playful Triad"), HarmonyArchetype::Triadic);
        assert_eq!(HarmonyArchetype::classify("anything"), HarmonyArchetype::Triadic);
    }

    #[test]
    fn styles_cover_every_archetype() {
        let count = |archetype: HarmonyArchetype| {
            EXTENDED_STYLES
                .iter()
                .filter(|style| HarmonyArchetype::classify(style.name) == archetype)
                .count()
        };
        assert_eq!(count(HarmonyArchetype::Contrast), 2);
        assert_eq!(count(HarmonyArchetype::Analog), 2);
        assert_eq!(count(HarmonyArchetype::Complementary), 2);
        assert_eq!(count(HarmonyArchetype::Monochromatic), 2);
        assert_eq!(count(HarmonyArchetype::Triadic), 4);
    }

    #[test]
    fn contrast_accent_is_opposite() {
        let colors = derive_harmony(BASE, HarmonyArchetype::Contrast);
        assert!((hue_gap(colors.accent, BASE) - 180.0).abs() < 1.5);
        assert!((hue_gap(colors.secondary, BASE) - 120.0).abs() < 1.5);
    }

    #[test]
    fn monochromatic_keeps_hue() {
        let colors = derive_harmony(BASE, HarmonyArchetype::Monochromatic);
        assert_eq!(colors.accent, colors.secondary);
        assert!(hue_gap(colors.accent, BASE) < 1.5);
        assert!(hue_gap(colors.background, BASE) < 1.5);
    }

    #[test]
    fn analog_background_shifts_back() {
        let colors = derive_harmony(BASE, HarmonyArchetype::Analog);
        let expected = BASE.to_hsl().h - 30.0;
        let gap = (colors.background.to_hsl().h - expected).rem_euclid(360.0);
        assert!(gap.min(360.0 - gap) < 2.0, "background hue off by {gap}");
    }

    #[test]
    fn backgrounds_stay_light_and_muted() {
        for archetype in [
            HarmonyArchetype::Contrast,
            HarmonyArchetype::Analog,
            HarmonyArchetype::Complementary,
            HarmonyArchetype::Monochromatic,
            HarmonyArchetype::Triadic,
        ] {
            let hsl = derive_harmony(BASE, archetype).background.to_hsl();
            let target = archetype.shifts().background_lightness;
            assert!((85.0..=92.0).contains(&target));
            assert!((hsl.l - target).abs() < 0.5, "{archetype:?}: l = {}", hsl.l);
            assert!(hsl.s <= BACKGROUND_MAX_SATURATION + 1.5, "{archetype:?}: s = {}", hsl.s);
            assert!(derive_harmony(BASE, archetype).background.is_light());
        }
    }

    #[test]
    fn extended_variations_follow_layout_and_shade() {
        let variations = extended_variations(BASE);
        assert_eq!(variations.len(), 12);
        assert_eq!(variations[0].name, "Harmony - Bold Contrast");

        let bold = &variations[0];
        assert_eq!(bold.brand_name_color, BASE);
        let soft = &variations[1];
        assert_eq!(soft.icon_color, BASE);
        assert_eq!(soft.brand_name_color, bold.icon_color);

        let pure = &variations[6];
        let deep = &variations[7];
        assert_eq!(deep.slogan_color, pure.slogan_color.adjust_brightness(-35.0));
        assert!(variations.iter().all(|v| !v.is_gradient));
    }
}
