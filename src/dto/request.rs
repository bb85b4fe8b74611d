use serde::Deserialize;
use tracing::warn;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    color::Color,
    dto::validation::validate_hex_color,
    error::PaletteError,
    model::{IconRef, LogoConfig, PaletteSpec},
    services::template::resolve_option,
};

/// Logo configuration as received from the UI layer, with colors still in string form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoConfigRequest {
    /// Palette picked from the catalog.
    #[serde(default)]
    pub palette: Option<PaletteRequest>,
    /// Single base color, `#RRGGBB`.
    #[serde(default)]
    pub base_color: Option<String>,
    /// Template option label (`plain`, `plus-white`, `plus-black`).
    #[serde(default)]
    pub option: Option<String>,
    /// Icon the user already chose.
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Industry used to narrow the icon pool.
    #[serde(default)]
    pub industry: Option<String>,
}

/// Raw palette entry: three hex colors plus display tags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteRequest {
    /// Colors in rank order (base, accent, text).
    pub colors: Vec<String>,
    /// Display/filter tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Validate for PaletteRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.colors.len() != PaletteSpec::SIZE {
            let mut err = ValidationError::new("palette_length");
            err.message = Some(
                format!(
                    "Palette must hold exactly {} colors (got {})",
                    PaletteSpec::SIZE,
                    self.colors.len()
                )
                .into(),
            );
            errors.add("colors", err);
        }

        for color in &self.colors {
            if let Err(e) = validate_hex_color(color) {
                errors.add("colors", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for LogoConfigRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref base) = self.base_color {
            if let Err(e) = validate_hex_color(base) {
                errors.add("base_color", e);
            }
        }

        if let Some(ref palette) = self.palette {
            if let Err(palette_errors) = palette.validate() {
                errors.merge_self("palette", Err(palette_errors));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl TryFrom<PaletteRequest> for PaletteSpec {
    type Error = PaletteError;

    fn try_from(value: PaletteRequest) -> Result<Self, Self::Error> {
        Ok(Self::from_hex(value.colors.as_slice())?.with_tags(value.tags))
    }
}

impl LogoConfigRequest {
    /// Convert into the typed configuration the engine consumes.
    ///
    /// Never fails: a malformed palette is dropped (the engine then emits its black-on-white
    /// fallback), a malformed base color is ignored, and an unknown option resolves to the
    /// monochrome template. Every recovery is logged.
    pub fn into_config(self) -> LogoConfig {
        if let Err(err) = self.validate() {
            warn!(error = %err, "logo configuration failed validation; applying fallbacks");
        }

        let palette = match self.palette.map(PaletteSpec::try_from) {
            Some(Ok(palette)) => Some(palette),
            Some(Err(err)) => {
                warn!(error = %err, "malformed palette; ignoring it");
                None
            }
            None => None,
        };

        let base_color = self
            .base_color
            .as_deref()
            .map(str::trim)
            .filter(|hex| !hex.is_empty())
            .and_then(|hex| match Color::from_hex(hex) {
                Ok(color) => Some(color),
                Err(err) => {
                    warn!(error = %err, base_color = hex, "malformed base color; ignoring it");
                    None
                }
            });

        LogoConfig {
            palette,
            base_color,
            option: self
                .option
                .as_deref()
                .map(resolve_option)
                .unwrap_or_default(),
            icon: self.icon,
            industry: self.industry,
        }
    }
}
