//! Engine configuration loading: the curated lookup tables injected into the generators.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{color::Color, model::IconRef};

/// Default location on disk where the engine looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/variations.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "LOGO_VARIATIONS_CONFIG_PATH";
/// Hue every template in the catalog was authored against.
pub const DEFAULT_REFERENCE_COLOR: Color = Color::new(0x31, 0x82, 0xCE);

#[derive(Debug, Clone, PartialEq)]
/// Immutable lookup tables shared by every generation call.
pub struct EngineConfig {
    reference_color: Color,
    icons: Vec<IconRef>,
}

impl EngineConfig {
    /// Build a configuration from explicit tables, typically small test fixtures.
    pub fn new(reference_color: Color, icons: Vec<IconRef>) -> Self {
        Self {
            reference_color,
            icons,
        }
    }

    /// Load the configuration from disk, falling back to the built-in tables.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        icons = config.icons.len(),
                        reference = %config.reference_color,
                        "loaded variation catalog from config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Color the template catalog was authored against.
    pub fn reference_color(&self) -> Color {
        self.reference_color
    }

    /// Icon catalog used for variations after the first.
    pub fn icons(&self) -> &[IconRef] {
        &self.icons
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_color: DEFAULT_REFERENCE_COLOR,
            icons: default_icons(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    #[serde(default)]
    reference_color: Option<Color>,
    #[serde(default)]
    icons: Option<Vec<IconRef>>,
}

impl From<RawConfig> for EngineConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            reference_color: value.reference_color.unwrap_or(DEFAULT_REFERENCE_COLOR),
            icons: value.icons.unwrap_or_else(default_icons),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in icon catalog shipped with the crate: icon id and industry tags.
const DEFAULT_ICONS: &[(&str, &[&str])] = &[
    ("rocket", &["tech", "startup"]),
    ("chip", &["tech"]),
    ("cloud", &["tech", "services"]),
    ("leaf", &["eco", "health"]),
    ("sprout", &["eco", "food"]),
    ("cup", &["food", "cafe"]),
    ("fork-knife", &["food"]),
    ("heart-pulse", &["health"]),
    ("shield", &["finance", "security"]),
    ("chart", &["finance", "consulting"]),
    ("brush", &["design", "art"]),
    ("camera", &["design", "media"]),
    ("hammer", &["construction"]),
    ("house", &["construction", "real-estate"]),
    ("book", &["education"]),
    ("star", &[]),
];

fn default_icons() -> Vec<IconRef> {
    DEFAULT_ICONS
        .iter()
        .map(|(id, categories)| IconRef::new(*id).with_categories(categories.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_fills_missing_tables() {
        let raw: RawConfig = serde_json::from_str(r##"{"referenceColor": "#FF0000"}"##).unwrap();
        let config: EngineConfig = raw.into();
        assert_eq!(config.reference_color(), Color::new(255, 0, 0));
        assert_eq!(config.icons(), default_icons().as_slice());
    }

    #[test]
    fn raw_config_reads_icons() {
        let raw: RawConfig = serde_json::from_str(
            r#"{"icons": [{"id": "owl", "categories": ["education"]}, {"id": "dot"}]}"#,
        )
        .unwrap();
        let config: EngineConfig = raw.into();
        assert_eq!(config.reference_color(), DEFAULT_REFERENCE_COLOR);
        assert_eq!(config.icons().len(), 2);
        assert!(config.icons()[0].matches_industry("education"));
        assert!(config.icons()[1].categories.is_empty());
    }

    #[test]
    fn invalid_reference_color_is_a_parse_error() {
        assert!(serde_json::from_str::<RawConfig>(r#"{"referenceColor": "blue"}"#).is_err());
    }

    #[test]
    fn default_catalog_is_tagged() {
        let config = EngineConfig::default();
        assert_eq!(config.reference_color(), DEFAULT_REFERENCE_COLOR);
        assert!(config.icons().iter().any(|icon| icon.matches_industry("tech")));
    }
}
