//! Error types raised while decoding colors and palettes.

use thiserror::Error;

/// Errors raised while decoding a `#RRGGBB` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string does not hold exactly six hexadecimal digits.
    #[error("expected 6 hex digits, got {0}")]
    InvalidHexLength(usize),
    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex digit in {0:?}")]
    InvalidHexDigit(String),
}

/// Errors raised while building a [`PaletteSpec`](crate::model::PaletteSpec) from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The palette does not hold exactly three colors.
    #[error("palette must hold exactly {expected} colors (got {actual})")]
    WrongSize {
        /// Number of colors a palette requires.
        expected: usize,
        /// Number of colors supplied.
        actual: usize,
    },
    /// One of the palette entries is not a valid hex color.
    #[error("palette color #{index} is invalid")]
    InvalidColor {
        /// Position of the offending entry.
        index: usize,
        /// Underlying decoding failure.
        #[source]
        source: ColorError,
    },
}
