//! Generators and the assembler that combines them.

/// Path selection and icon attachment.
pub mod assembler;
/// Palette path: candidate enumeration, scoring and bucketed selection.
pub mod combination;
/// Extended harmony styles derived from a base color.
pub mod harmony;
/// Icon pool filtering and assignment.
pub mod icons;
/// Base-color path: template catalog and hue recoloring.
pub mod template;
