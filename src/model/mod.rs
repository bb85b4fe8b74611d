//! Domain types exchanged between the generators and their callers.

mod palette;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;

pub use self::palette::{BackgroundSpec, PaletteRole, PaletteSpec};

/// Reference to an icon from the caller's catalog, tagged with the industries it suits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef {
    /// Catalog identifier of the icon.
    pub id: String,
    /// Industry/category tags (e.g. "tech", "food").
    #[serde(default)]
    pub categories: Vec<String>,
}

impl IconRef {
    /// Build an untagged icon reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            categories: Vec::new(),
        }
    }

    /// Attach industry/category tags.
    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// True when the icon is tagged with `industry` (case-insensitive).
    pub fn matches_industry(&self, industry: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.eq_ignore_ascii_case(industry))
    }
}

/// Which authored template family recolors a single base color.
///
/// Labels outside the known set resolve to [`TemplateOption::Monochrome`], the safe default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TemplateOption {
    /// Base color only.
    #[default]
    Plain,
    /// Base color combined with white.
    PlusWhite,
    /// Base color combined with black.
    PlusBlack,
    /// Single base-on-white variant.
    Monochrome,
}

impl TemplateOption {
    /// Resolve a caller-supplied option label. Returns `None` for unknown labels so callers can
    /// log the miss before falling back.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "plain" | "" => Some(Self::Plain),
            "plus-white" | "plus_white" | "white" => Some(Self::PlusWhite),
            "plus-black" | "plus_black" | "black" => Some(Self::PlusBlack),
            "monochrome" => Some(Self::Monochrome),
            _ => None,
        }
    }
}

/// Current logo configuration as seen by the generators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogoConfig {
    /// Full palette picked by the user, if any.
    pub palette: Option<PaletteSpec>,
    /// Single base color picked by the user, if any. Takes precedence over `palette`.
    pub base_color: Option<Color>,
    /// Template family used with `base_color`.
    pub option: TemplateOption,
    /// Icon the user already chose.
    pub icon: Option<IconRef>,
    /// Industry used to narrow the icon pool.
    pub industry: Option<String>,
}

/// A finished color assignment for one logo preview.
///
/// Values, not resources: every generation call builds fresh ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoVariation {
    /// Identifier derived from the variation's name and colors, stable across calls.
    pub id: Uuid,
    /// Human readable name.
    pub name: String,
    /// Color of the brand name text.
    pub brand_name_color: Color,
    /// Color of the icon.
    pub icon_color: Color,
    /// Background fill.
    pub background_color: BackgroundSpec,
    /// Color of the slogan text.
    pub slogan_color: Color,
    /// True when `background_color` is a gradient.
    pub is_gradient: bool,
    /// Legibility score, present for palette-derived variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Icon attached to this preview.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
}

impl LogoVariation {
    /// Build a variation, deriving its identifier and gradient flag.
    pub fn new(
        name: impl Into<String>,
        brand_name_color: Color,
        icon_color: Color,
        background_color: BackgroundSpec,
        slogan_color: Color,
    ) -> Self {
        let name = name.into();
        let fingerprint =
            format!("{name}|{brand_name_color}|{icon_color}|{background_color}|{slogan_color}");
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, fingerprint.as_bytes()),
            is_gradient: background_color.is_gradient(),
            name,
            brand_name_color,
            icon_color,
            background_color,
            slogan_color,
            score: None,
            icon: None,
        }
    }

    /// Attach the legibility score.
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// The safe fallback preview: black brand, icon and slogan on white.
    pub fn black_on_white() -> Self {
        Self::new(
            "Black on White",
            Color::BLACK,
            Color::BLACK,
            BackgroundSpec::Solid(Color::WHITE),
            Color::BLACK,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_option_labels() {
        assert_eq!(TemplateOption::from_label("plain"), Some(TemplateOption::Plain));
        assert_eq!(
            TemplateOption::from_label(" Plus-White "),
            Some(TemplateOption::PlusWhite)
        );
        assert_eq!(
            TemplateOption::from_label("plus_black"),
            Some(TemplateOption::PlusBlack)
        );
        assert_eq!(TemplateOption::from_label("sparkles"), None);
    }

    #[test]
    fn variation_id_is_stable_and_content_addressed() {
        let a = LogoVariation::black_on_white();
        let b = LogoVariation::black_on_white();
        assert_eq!(a.id, b.id);
        assert!(!a.is_gradient);

        let other = LogoVariation::new(
            "Black on White",
            Color::BLACK,
            Color::new(1, 1, 1),
            BackgroundSpec::Solid(Color::WHITE),
            Color::BLACK,
        );
        assert_ne!(a.id, other.id);
    }

    #[test]
    fn variation_serializes_camel_case() {
        let variation = LogoVariation::new(
            "Sunrise",
            Color::WHITE,
            Color::WHITE,
            BackgroundSpec::gradient(Color::new(255, 0, 0), Color::new(0, 0, 255), 135),
            Color::WHITE,
        );
        let json = serde_json::to_value(&variation).unwrap();
        assert_eq!(json["brandNameColor"], "#FFFFFF");
        assert_eq!(
            json["backgroundColor"],
            "linear-gradient(135deg, #FF0000, #0000FF)"
        );
        assert_eq!(json["isGradient"], true);
        assert!(json.get("score").is_none());
        assert!(json.get("icon").is_none());
    }

    #[test]
    fn icon_industry_match_ignores_case() {
        let icon = IconRef::new("rocket").with_categories(["Tech", "space"]);
        assert!(icon.matches_industry("tech"));
        assert!(!icon.matches_industry("food"));
    }
}
