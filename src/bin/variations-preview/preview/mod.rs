//! Helper tool rendering the generated logo variations as an HTML swatch grid.
//!
//! Input comes from the environment:
//! `LOGO_PALETTE` (three comma separated hex colors), `LOGO_BASE_COLOR`, `LOGO_OPTION`,
//! `LOGO_ICON` and `LOGO_INDUSTRY`.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod html;
mod json_io;

use anyhow::{Context, Result};
use html::write_html_grid;
use json_io::save_variations_json;
use logo_variations::{
    EngineConfig, IconRef, LogoConfigRequest, VariationEngine, dto::PaletteRequest,
};
use std::{env, fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const GRID_COLS: usize = 4;

pub fn run() -> Result<()> {
    init_tracing();

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("variations-preview");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let request = request_from_env();
    let title = title_for(&request);
    let engine = VariationEngine::new(EngineConfig::load());
    let variations = engine.generate_request(request);

    let html_path = write_html_grid(
        &title,
        GRID_COLS,
        &variations,
        out_dir.join("variations.html"),
    )
    .context("writing html preview")?;
    let json_path = save_variations_json(out_dir.join("variations.json"), &variations)
        .context("writing json dump")?;

    info!(count = variations.len(), "rendered variations");
    println!(
        "Generated variation previews in {}:\n  - {}\n  - {}",
        out_dir.display(),
        html_path.display(),
        json_path.display()
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,logo_variations=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn request_from_env() -> LogoConfigRequest {
    LogoConfigRequest {
        palette: env_value("LOGO_PALETTE").map(|raw| PaletteRequest {
            colors: raw.split(',').map(|hex| hex.trim().to_owned()).collect(),
            tags: Vec::new(),
        }),
        base_color: env_value("LOGO_BASE_COLOR"),
        option: env_value("LOGO_OPTION"),
        icon: env_value("LOGO_ICON").map(IconRef::new),
        industry: env_value("LOGO_INDUSTRY"),
    }
}

fn title_for(request: &LogoConfigRequest) -> String {
    match (&request.base_color, &request.palette) {
        (Some(base), _) => format!(
            "Base color {base} ({})",
            request.option.as_deref().unwrap_or("plain")
        ),
        (None, Some(palette)) => format!("Palette {}", palette.colors.join(", ")),
        (None, None) => "No palette".to_owned(),
    }
}
