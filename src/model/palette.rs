use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;
use serde_with::SerializeDisplay;

use crate::{
    color::{Color, contrast_ratio, gradient_contrast},
    error::PaletteError,
};

/// Semantic rank of a color inside a [`PaletteSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaletteRole {
    /// Index 0, leans toward backgrounds.
    Base,
    /// Index 1.
    Accent,
    /// Index 2, leans toward text.
    Text,
}

impl PaletteRole {
    /// Roles in palette order.
    pub const ALL: [Self; 3] = [Self::Base, Self::Accent, Self::Text];

    /// Display label used when naming variations.
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Accent => "Accent",
            Self::Text => "Text",
        }
    }
}

/// A ranked three-color brand palette plus free-form tags ("corporate", "neon", ...).
///
/// Tags are carried for callers that filter or display palettes; the generators ignore them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSpec {
    colors: [Color; 3],
    tags: IndexSet<String>,
}

impl PaletteSpec {
    /// Number of colors every palette holds.
    pub const SIZE: usize = 3;

    /// Build an untagged palette.
    pub fn new(colors: [Color; 3]) -> Self {
        Self {
            colors,
            tags: IndexSet::new(),
        }
    }

    /// Decode a palette from hex strings, requiring exactly three valid entries.
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, PaletteError> {
        if hexes.len() != Self::SIZE {
            return Err(PaletteError::WrongSize {
                expected: Self::SIZE,
                actual: hexes.len(),
            });
        }
        let mut colors = [Color::BLACK; 3];
        for (index, (slot, hex)) in colors.iter_mut().zip(hexes).enumerate() {
            *slot = Color::from_hex(hex.as_ref())
                .map_err(|source| PaletteError::InvalidColor { index, source })?;
        }
        Ok(Self::new(colors))
    }

    /// Attach tags, dropping duplicates while keeping first-seen order.
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The three colors in rank order.
    pub fn colors(&self) -> &[Color; 3] {
        &self.colors
    }

    /// Color holding the given role.
    pub fn color(&self, role: PaletteRole) -> Color {
        self.colors[role as usize]
    }

    /// Tags attached to the palette.
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    /// Role of the first palette slot holding `color`, if any.
    pub fn role_of(&self, color: Color) -> Option<PaletteRole> {
        PaletteRole::ALL
            .into_iter()
            .find(|role| self.color(*role) == color)
    }
}

/// Background of a logo preview: a solid fill or a directed two-stop linear gradient.
///
/// Serializes as the CSS value a presentation layer can paint directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay)]
pub enum BackgroundSpec {
    /// Single flat color.
    Solid(Color),
    /// Linear gradient from `from` to `to`.
    Gradient {
        /// First stop.
        from: Color,
        /// Last stop.
        to: Color,
        /// Direction in degrees, `0..=360`.
        angle: u16,
    },
}

impl BackgroundSpec {
    /// Build a gradient, folding the angle into `0..=360`.
    pub fn gradient(from: Color, to: Color, angle: u16) -> Self {
        Self::Gradient {
            from,
            to,
            angle: if angle > 360 { angle % 360 } else { angle },
        }
    }

    /// True for gradient backgrounds.
    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient { .. })
    }

    /// The solid color, if this is not a gradient.
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(color) => Some(*color),
            Self::Gradient { .. } => None,
        }
    }

    /// Contrast of `foreground` against this background; gradients report their worst stop.
    pub fn contrast_with(&self, foreground: Color) -> f64 {
        match *self {
            Self::Solid(color) => contrast_ratio(foreground, color),
            Self::Gradient { from, to, .. } => gradient_contrast(foreground, from, to),
        }
    }
}

impl From<Color> for BackgroundSpec {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl fmt::Display for BackgroundSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::Gradient { from, to, angle } => {
                write!(f, "linear-gradient({angle}deg, {from}, {to})")
            }
        }
    }
}
