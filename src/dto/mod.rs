//! Request boundary: raw, string-typed input from the UI layer and its validation.

mod request;
pub mod validation;

pub use self::request::{LogoConfigRequest, PaletteRequest};
