//! Base-color path: recolor an authored template family to the user's hue.
//!
//! Every template is written against one fixed reference color. Generation evaluates the
//! formulas on that reference, then rotates each resulting solid by the hue delta between the
//! reference and the chosen base color, so the authored saturation/lightness relationships
//! survive while the hue follows the user. Literal white/black and gradients pass through.

use tracing::{debug, warn};

use crate::{
    color::{Color, HslColor, hue_difference},
    model::{BackgroundSpec, LogoVariation, TemplateOption},
    services::harmony,
};

/// Computes one color from the reference color.
pub type ColorFormula = fn(Color) -> Color;
/// Computes a background from the reference color.
pub type BackgroundFormula = fn(Color) -> BackgroundSpec;

/// One named variant of a template: four formulas evaluated against the reference color.
#[derive(Debug, Clone, Copy)]
pub struct VariantFormula {
    /// Variant name, shown after the template name.
    pub name: &'static str,
    /// Brand name color.
    pub brand_name: ColorFormula,
    /// Icon color.
    pub icon: ColorFormula,
    /// Background fill.
    pub background: BackgroundFormula,
    /// Slogan color.
    pub slogan: ColorFormula,
}

/// A named, ordered family of variant formulas.
#[derive(Debug, Clone, Copy)]
pub struct GenerationTemplate {
    /// Template name.
    pub name: &'static str,
    /// Variants in display order.
    pub variants: &'static [VariantFormula],
    /// Evaluate the formulas on the base color itself instead of recoloring the reference.
    pub on_base: bool,
}

fn same(color: Color) -> Color {
    color
}

fn white(_: Color) -> Color {
    Color::WHITE
}

fn black(_: Color) -> Color {
    Color::BLACK
}

fn with_lightness(color: Color, lightness: f64) -> Color {
    let hsl = color.to_hsl();
    Color::from_hsl(HslColor::new(hsl.h, hsl.s, lightness))
}

fn tint(color: Color) -> Color {
    with_lightness(color, 95.0)
}

fn light(color: Color) -> Color {
    with_lightness(color, 75.0)
}

fn deep(color: Color) -> Color {
    with_lightness(color, 30.0)
}

fn on_white(_: Color) -> BackgroundSpec {
    BackgroundSpec::Solid(Color::WHITE)
}

fn on_black(_: Color) -> BackgroundSpec {
    BackgroundSpec::Solid(Color::BLACK)
}

fn on_same(color: Color) -> BackgroundSpec {
    BackgroundSpec::Solid(color)
}

fn on_tint(color: Color) -> BackgroundSpec {
    BackgroundSpec::Solid(tint(color))
}

fn on_deep(color: Color) -> BackgroundSpec {
    BackgroundSpec::Solid(deep(color))
}

fn on_mist(_: Color) -> BackgroundSpec {
    BackgroundSpec::gradient(Color::WHITE, Color::new(0xED, 0xED, 0xED), 135)
}

fn on_charcoal(_: Color) -> BackgroundSpec {
    BackgroundSpec::gradient(Color::new(0x1A, 0x1A, 0x1A), Color::new(0x4A, 0x4A, 0x4A), 135)
}

const fn variant(
    name: &'static str,
    brand_name: ColorFormula,
    icon: ColorFormula,
    background: BackgroundFormula,
    slogan: ColorFormula,
) -> VariantFormula {
    VariantFormula {
        name,
        brand_name,
        icon,
        background,
        slogan,
    }
}

static CLASSIC: GenerationTemplate = GenerationTemplate {
    name: "Classic",
    on_base: false,
    variants: &[
        variant("Solid", same, same, on_white, deep),
        variant("Inverted", white, white, on_same, white),
        variant("Tinted", deep, same, on_tint, deep),
        variant("Soft", deep, light, on_white, same),
    ],
};

static WITH_WHITE: GenerationTemplate = GenerationTemplate {
    name: "With White",
    on_base: false,
    variants: &[
        variant("White Text", white, light, on_same, white),
        variant("White Icon", light, white, on_deep, white),
        variant("White Backdrop", same, same, on_white, same),
        variant("Mist", same, deep, on_mist, deep),
    ],
};

static WITH_BLACK: GenerationTemplate = GenerationTemplate {
    name: "With Black",
    on_base: false,
    variants: &[
        variant("Black Text", black, same, on_white, black),
        variant("Black Backdrop", same, light, on_black, white),
        variant("Tinted Black", black, deep, on_tint, black),
        variant("Charcoal", white, same, on_charcoal, light),
    ],
};

static MONOCHROME: GenerationTemplate = GenerationTemplate {
    name: "Monochrome",
    on_base: true,
    variants: &[variant("Monochrome", same, same, on_white, same)],
};

impl TemplateOption {
    /// The template family behind this option.
    pub fn template(self) -> &'static GenerationTemplate {
        match self {
            Self::Plain => &CLASSIC,
            Self::PlusWhite => &WITH_WHITE,
            Self::PlusBlack => &WITH_BLACK,
            // Default arm for every unresolved label.
            Self::Monochrome => &MONOCHROME,
        }
    }
}

/// Resolve a raw option label, falling back to [`TemplateOption::Monochrome`] with a warning.
pub fn resolve_option(label: &str) -> TemplateOption {
    TemplateOption::from_label(label).unwrap_or_else(|| {
        warn!(option = label, "unknown template option; falling back to monochrome");
        TemplateOption::Monochrome
    })
}

/// Rotates solids by a fixed hue delta, leaving white and black untouched.
#[derive(Debug, Clone, Copy)]
struct Recolor {
    delta: f64,
}

impl Recolor {
    fn color(self, color: Color) -> Color {
        if color.is_white_or_black() {
            color
        } else {
            color.rotate_hue(self.delta)
        }
    }

    fn background(self, background: BackgroundSpec) -> BackgroundSpec {
        match background {
            BackgroundSpec::Solid(color) => BackgroundSpec::Solid(self.color(color)),
            gradient @ BackgroundSpec::Gradient { .. } => gradient,
        }
    }
}

/// Evaluate `template` against `reference` and recolor the results to `base`'s hue.
///
/// Templates marked `on_base` skip the recoloring and are evaluated on `base` directly.
pub fn recolor_template(
    template: &GenerationTemplate,
    reference: Color,
    base: Color,
) -> Vec<LogoVariation> {
    if template.on_base {
        return template
            .variants
            .iter()
            .map(|formula| {
                LogoVariation::new(
                    format!("{} - {}", template.name, formula.name),
                    (formula.brand_name)(base),
                    (formula.icon)(base),
                    (formula.background)(base),
                    (formula.slogan)(base),
                )
            })
            .collect();
    }

    let recolor = Recolor {
        delta: hue_difference(reference, base),
    };
    debug!(
        template = template.name,
        delta = recolor.delta,
        "recoloring template"
    );

    template
        .variants
        .iter()
        .map(|formula| {
            LogoVariation::new(
                format!("{} - {}", template.name, formula.name),
                recolor.color((formula.brand_name)(reference)),
                recolor.color((formula.icon)(reference)),
                recolor.background((formula.background)(reference)),
                recolor.color((formula.slogan)(reference)),
            )
        })
        .collect()
}

/// Base-color path entry point.
///
/// Recolors the option's template to `base` (or leaves it on `reference` when no base was
/// chosen). An explicitly chosen base also yields the twelve extended harmony variations.
pub fn template_variations(
    base: Option<Color>,
    option: TemplateOption,
    reference: Color,
) -> Vec<LogoVariation> {
    let target = base.unwrap_or(reference);
    let mut variations = recolor_template(option.template(), reference, target);
    if let Some(base) = base {
        variations.extend(harmony::extended_variations(base));
    }
    variations
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(255, 0, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn is_rotated_by(authored: Color, produced: Color, expected: f64) -> bool {
        let gap = (produced.to_hsl().h - authored.to_hsl().h).rem_euclid(360.0);
        let distance = (gap - expected.rem_euclid(360.0)).abs();
        distance.min(360.0 - distance) < 1.5
    }

    #[test]
    fn options_resolve_to_expected_templates() {
        assert_eq!(TemplateOption::Plain.template().name, "Classic");
        assert_eq!(TemplateOption::PlusWhite.template().name, "With White");
        assert_eq!(TemplateOption::PlusBlack.template().name, "With Black");
        assert_eq!(resolve_option("glitter"), TemplateOption::Monochrome);
        assert_eq!(resolve_option("plus-black"), TemplateOption::PlusBlack);
    }

    #[test]
    fn unknown_option_yields_single_monochrome_variant() {
        let base = Color::new(0x2F, 0x85, 0x5A);
        let reference = Color::new(0x31, 0x82, 0xCE);
        let variations = template_variations(Some(base), resolve_option("glitter"), reference);
        assert_eq!(variations.len(), 1 + harmony::EXTENDED_STYLES.len());
        let only = &variations[0];
        assert_eq!(only.name, "Monochrome - Monochrome");
        assert_eq!(only.background_color, BackgroundSpec::Solid(Color::WHITE));
        assert_eq!(only.brand_name_color, base);
        assert_eq!(only.icon_color, base);
        assert_eq!(only.slogan_color, base);
    }

    #[test]
    fn gray_base_keeps_authored_hues() {
        let gray = Color::new(0x80, 0x80, 0x80);
        let variations = recolor_template(TemplateOption::Plain.template(), RED, gray);
        assert_eq!(variations[0].brand_name_color, RED);
        assert_eq!(variations[0].slogan_color, deep(RED));

        let mono = template_variations(Some(gray), TemplateOption::Monochrome, RED);
        assert_eq!(mono[0].brand_name_color, gray);
    }

    #[test]
    fn plain_blue_rotates_every_solid_by_minus_120() {
        let template = TemplateOption::Plain.template();
        let variations = recolor_template(template, RED, BLUE);
        assert_eq!(variations.len(), template.variants.len());

        for (formula, produced) in template.variants.iter().zip(&variations) {
            let pairs = [
                ((formula.brand_name)(RED), produced.brand_name_color),
                ((formula.icon)(RED), produced.icon_color),
                ((formula.slogan)(RED), produced.slogan_color),
            ];
            for (authored, produced) in pairs {
                if authored.is_white_or_black() {
                    assert_eq!(authored, produced);
                } else {
                    assert!(
                        is_rotated_by(authored, produced, -120.0),
                        "{}: {authored} -> {produced}",
                        formula.name
                    );
                    assert_eq!(produced, authored.rotate_hue(240.0));
                }
            }
            match ((formula.background)(RED), produced.background_color) {
                (BackgroundSpec::Solid(authored), BackgroundSpec::Solid(produced))
                    if !authored.is_white_or_black() =>
                {
                    assert!(is_rotated_by(authored, produced, 240.0));
                }
                (authored, produced) => assert_eq!(authored, produced),
            }
        }
    }

    #[test]
    fn gradients_and_achromatics_pass_through() {
        let base = Color::new(0x38, 0xA1, 0x69);
        let reference = Color::new(0x31, 0x82, 0xCE);
        let variations = recolor_template(TemplateOption::PlusBlack.template(), reference, base);
        let charcoal = variations
            .iter()
            .find(|v| v.name == "With Black - Charcoal")
            .unwrap();
        assert!(charcoal.is_gradient);
        assert_eq!(charcoal.background_color, on_charcoal(reference));
        assert_eq!(charcoal.brand_name_color, Color::WHITE);

        let black_text = &variations[0];
        assert_eq!(black_text.brand_name_color, Color::BLACK);
        assert_eq!(black_text.background_color, BackgroundSpec::Solid(Color::WHITE));
    }

    #[test]
    fn names_combine_template_and_variant() {
        let names: Vec<String> = recolor_template(TemplateOption::PlusWhite.template(), RED, RED)
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(
            names,
            [
                "With White - White Text",
                "With White - White Icon",
                "With White - White Backdrop",
                "With White - Mist",
            ]
        );
    }

    #[test]
    fn extended_variations_only_for_explicit_base() {
        let without = template_variations(None, TemplateOption::Plain, RED);
        assert_eq!(without.len(), 4);
        let with = template_variations(Some(BLUE), TemplateOption::Plain, RED);
        assert_eq!(with.len(), 4 + harmony::EXTENDED_STYLES.len());
    }

    #[test]
    fn base_equal_to_reference_keeps_authored_colors() {
        let variations = recolor_template(TemplateOption::Plain.template(), RED, RED);
        assert_eq!(variations[0].brand_name_color, RED);
        assert_eq!(variations[0].slogan_color, deep(RED));
    }
}
