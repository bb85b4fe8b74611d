//! Logo color variation engine.
//!
//! Turns a logo configuration (a three-color palette, or a single base color plus a template
//! option) into an ordered list of named color assignments for brand name, icon, background
//! and slogan. Palette input is enumerated exhaustively and ranked by WCAG contrast; base-color
//! input recolors an authored template family and adds harmony styles.

pub mod color;
pub mod config;
pub mod dto;
pub mod error;
pub mod model;
pub mod services;

pub use crate::{
    color::Color,
    config::EngineConfig,
    dto::LogoConfigRequest,
    error::{ColorError, PaletteError},
    model::{BackgroundSpec, IconRef, LogoConfig, LogoVariation, PaletteSpec, TemplateOption},
    services::assembler::VariationEngine,
};
