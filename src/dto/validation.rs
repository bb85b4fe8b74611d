//! Validation helpers for request DTOs.

use validator::ValidationError;

use crate::{color::Color, error::ColorError};

/// Validates that a color is written as six hexadecimal digits, optionally prefixed by `#`.
///
/// # Examples
///
/// ```ignore
/// validate_hex_color("#3182CE") // Ok
/// validate_hex_color("3182ce")  // Ok - case-insensitive, `#` optional
/// validate_hex_color("#318")    // Err - too short
/// validate_hex_color("#31G2CE") // Err - not hexadecimal
/// ```
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    match Color::from_hex(value) {
        Ok(_) => Ok(()),
        Err(ColorError::InvalidHexLength(len)) => {
            let mut err = ValidationError::new("hex_color_length");
            err.message =
                Some(format!("Color must have exactly 6 hex digits (got {len})").into());
            Err(err)
        }
        Err(ColorError::InvalidHexDigit(_)) => {
            let mut err = ValidationError::new("hex_color_format");
            err.message = Some("Color must contain only hexadecimal characters".into());
            Err(err)
        }
    }
}
