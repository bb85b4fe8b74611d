//! Variation assembler: picks the generation path for a logo configuration and attaches icons.

use rand::Rng;
use tracing::{debug, info};

use crate::{
    config::EngineConfig,
    dto::LogoConfigRequest,
    model::{LogoConfig, LogoVariation},
    services::{
        combination::palette_variations,
        icons::{assign_icons, icon_pool},
        template::template_variations,
    },
};

/// Entry point of the engine. Holds the injected lookup tables; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct VariationEngine {
    config: EngineConfig,
}

impl VariationEngine {
    /// Create an engine backed by `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Lookup tables in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate the variations for `config`, drawing icons with the thread-local RNG.
    pub fn generate(&self, config: &LogoConfig) -> Vec<LogoVariation> {
        self.generate_with_rng(config, &mut rand::rng())
    }

    /// Generate the variations for `config` using `rng` for icon assignment.
    ///
    /// A base color selects the template path, otherwise the palette path runs. The result is
    /// never empty: without usable input it holds the black-on-white fallback.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        config: &LogoConfig,
        rng: &mut R,
    ) -> Vec<LogoVariation> {
        let mut variations = match config.base_color {
            Some(base) => {
                debug!(base = %base, option = ?config.option, "generating from base color");
                template_variations(Some(base), config.option, self.config.reference_color())
            }
            None => {
                debug!(has_palette = config.palette.is_some(), "generating from palette");
                palette_variations(config.palette.as_ref())
            }
        };
        if variations.is_empty() {
            variations.push(LogoVariation::black_on_white());
        }

        let pool = icon_pool(self.config.icons(), config.industry.as_deref());
        assign_icons(&mut variations, config.icon.as_ref(), &pool, rng);

        info!(
            count = variations.len(),
            icons = pool.len(),
            "generated logo variations"
        );
        variations
    }

    /// Validate and convert a raw request, then generate its variations.
    pub fn generate_request(&self, request: LogoConfigRequest) -> Vec<LogoVariation> {
        self.generate(&request.into_config())
    }
}
