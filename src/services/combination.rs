//! Palette path: enumerate every background/foreground assignment for a three-color palette,
//! score each by WCAG contrast and keep a bounded, bucketed selection.
//!
//! ```text
//! 5 solids + 6 gradients      3 x 3 (brand, icon) pairs
//!          \                     /
//!           99 candidates ── score ── dedupe
//!                                        │
//!              white 2 · black 2 · solid 4 · gradient 4
//!                                        │
//!                             merged, sorted by score
//! ```

use std::cmp::Ordering;

use indexmap::IndexSet;
use tracing::debug;

use crate::{
    color::Color,
    model::{BackgroundSpec, LogoVariation, PaletteSpec},
};

/// Direction of every generated gradient, in degrees.
pub const GRADIENT_ANGLE: u16 = 135;
/// Scores below this are considered poorly legible and halved.
pub const MIN_LEGIBLE_SCORE: f64 = 2.0;
/// Reward for distinct brand and icon colors.
const HIERARCHY_BONUS: f64 = 1.1;
const LEGIBILITY_PENALTY: f64 = 0.5;

/// One background/brand/icon assignment before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariationCandidate {
    /// Background fill.
    pub background: BackgroundSpec,
    /// Brand name color.
    pub brand: Color,
    /// Icon color.
    pub icon: Color,
}

/// A candidate with its legibility score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// The scored assignment.
    pub candidate: VariationCandidate,
    /// Non-negative score rounded to two decimals.
    pub score: f64,
    /// Position in enumeration order, used to break score ties.
    pub position: usize,
}

/// Selection bucket of a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundCategory {
    /// Solid white.
    White,
    /// Solid black.
    Black,
    /// Any other solid color.
    Solid,
    /// Two-stop gradient.
    Gradient,
}

impl BackgroundCategory {
    /// Buckets in selection order.
    pub const ALL: [Self; 4] = [Self::White, Self::Black, Self::Solid, Self::Gradient];

    /// Classify a background.
    pub fn of(background: &BackgroundSpec) -> Self {
        match background {
            BackgroundSpec::Solid(color) if *color == Color::WHITE => Self::White,
            BackgroundSpec::Solid(color) if *color == Color::BLACK => Self::Black,
            BackgroundSpec::Solid(_) => Self::Solid,
            BackgroundSpec::Gradient { .. } => Self::Gradient,
        }
    }

    /// How many candidates the bucket contributes at most.
    pub fn quota(self) -> usize {
        match self {
            Self::White | Self::Black => 2,
            Self::Solid | Self::Gradient => 4,
        }
    }
}

/// White, black, the three palette colors, then every ordered pair of distinct palette slots
/// as a gradient: 11 backgrounds.
pub fn background_set(palette: &PaletteSpec) -> Vec<BackgroundSpec> {
    let colors = palette.colors();
    let mut backgrounds = vec![
        BackgroundSpec::Solid(Color::WHITE),
        BackgroundSpec::Solid(Color::BLACK),
    ];
    backgrounds.extend(colors.iter().copied().map(BackgroundSpec::Solid));
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        backgrounds.push(BackgroundSpec::gradient(colors[i], colors[j], GRADIENT_ANGLE));
        backgrounds.push(BackgroundSpec::gradient(colors[j], colors[i], GRADIENT_ANGLE));
    }
    backgrounds
}

/// Full product of [`background_set`] and every `(brand, icon)` pair drawn from the palette.
pub fn enumerate_candidates(palette: &PaletteSpec) -> Vec<VariationCandidate> {
    let colors = palette.colors();
    background_set(palette)
        .into_iter()
        .flat_map(|background| {
            colors.iter().flat_map(move |&brand| {
                colors.iter().map(move |&icon| VariationCandidate {
                    background,
                    brand,
                    icon,
                })
            })
        })
        .collect()
}

/// Legibility score of a candidate.
///
/// The base is the weaker of the brand and icon contrasts against the background (worst stop
/// for gradients). An all-one-color solid scores 0, distinct brand/icon colors earn a 1.1
/// bonus, and anything still under [`MIN_LEGIBLE_SCORE`] is halved.
pub fn score_candidate(candidate: &VariationCandidate) -> f64 {
    let VariationCandidate {
        background,
        brand,
        icon,
    } = *candidate;

    if background.as_solid() == Some(brand) && brand == icon {
        return 0.0;
    }

    let mut score = background
        .contrast_with(brand)
        .min(background.contrast_with(icon));
    if brand != icon {
        score *= HIERARCHY_BONUS;
    }
    if score < MIN_LEGIBLE_SCORE {
        score *= LEGIBILITY_PENALTY;
    }
    (score * 100.0).round() / 100.0
}

fn by_score_then_position(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Score every unique candidate and keep the best of each background bucket, merged and
/// sorted by descending score.
pub fn select_candidates(palette: &PaletteSpec) -> Vec<ScoredCandidate> {
    let candidates = enumerate_candidates(palette);
    let total = candidates.len();
    // Palettes containing white or black repeat the fixed solids.
    let unique: IndexSet<VariationCandidate> = candidates.into_iter().collect();

    let scored: Vec<ScoredCandidate> = unique
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| ScoredCandidate {
            score: score_candidate(&candidate),
            candidate,
            position,
        })
        .collect();

    let mut selected: Vec<ScoredCandidate> = BackgroundCategory::ALL
        .into_iter()
        .flat_map(|category| {
            let mut bucket: Vec<ScoredCandidate> = scored
                .iter()
                .filter(|entry| BackgroundCategory::of(&entry.candidate.background) == category)
                .copied()
                .collect();
            bucket.sort_by(by_score_then_position);
            bucket.truncate(category.quota());
            bucket
        })
        .collect();
    selected.sort_by(by_score_then_position);

    debug!(
        candidates = total,
        unique = scored.len(),
        selected = selected.len(),
        "selected palette combinations"
    );
    selected
}

/// Label of a foreground color: its palette role, else the literal achromatic name, else hex.
fn role_label(palette: &PaletteSpec, color: Color) -> String {
    match palette.role_of(color) {
        Some(role) => role.label().to_owned(),
        None if color == Color::WHITE => "White".to_owned(),
        None if color == Color::BLACK => "Black".to_owned(),
        None => color.to_hex(),
    }
}

/// Label of a background: the fixed solids by name, palette solids by role.
fn background_label(palette: &PaletteSpec, background: &BackgroundSpec) -> String {
    match BackgroundCategory::of(background) {
        BackgroundCategory::White => "White".to_owned(),
        BackgroundCategory::Black => "Black".to_owned(),
        BackgroundCategory::Solid | BackgroundCategory::Gradient => match *background {
            BackgroundSpec::Solid(color) => role_label(palette, color),
            BackgroundSpec::Gradient { from, to, .. } => format!(
                "{} to {} Gradient",
                role_label(palette, from),
                role_label(palette, to)
            ),
        },
    }
}

/// Display name such as `"White - Base Text, Accent Icon"` or `"Base to Text Gradient - Both Accent"`.
pub fn variation_name(palette: &PaletteSpec, candidate: &VariationCandidate) -> String {
    let background = background_label(palette, &candidate.background);
    let foreground = if candidate.brand == candidate.icon {
        format!("Both {}", role_label(palette, candidate.brand))
    } else {
        format!(
            "{} Text, {} Icon",
            role_label(palette, candidate.brand),
            role_label(palette, candidate.icon)
        )
    };
    format!("{background} - {foreground}")
}

/// Palette path entry point: named, scored variations in descending score order.
///
/// Without a palette the result is the single black-on-white fallback. Icons are attached by
/// the assembler.
pub fn palette_variations(palette: Option<&PaletteSpec>) -> Vec<LogoVariation> {
    let Some(palette) = palette else {
        debug!("no palette supplied; using black-on-white fallback");
        return vec![LogoVariation::black_on_white()];
    };

    let variations: Vec<LogoVariation> = select_candidates(palette)
        .iter()
        .map(|entry| {
            let candidate = &entry.candidate;
            LogoVariation::new(
                variation_name(palette, candidate),
                candidate.brand,
                candidate.icon,
                candidate.background,
                candidate.brand,
            )
            .with_score(entry.score)
        })
        .collect();

    if variations.is_empty() {
        return vec![LogoVariation::black_on_white()];
    }
    variations
}
