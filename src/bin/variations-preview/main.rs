//! Helper tool rendering the generated logo variations as an HTML swatch grid.

#[cfg(feature = "tool-preview")]
mod preview;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tool-preview")]
    {
        preview::run()?;
    }
    Ok(())
}
