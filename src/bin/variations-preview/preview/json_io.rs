#![forbid(unsafe_code)]

use anyhow::Result;
use logo_variations::LogoVariation;
use std::{fs::File, io::BufWriter, path::PathBuf};

/// Serialize the generated variations to a JSON file.
pub fn save_variations_json(
    path: impl AsRef<std::path::Path>,
    variations: &[LogoVariation],
) -> Result<PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let w = BufWriter::new(f);
    serde_json::to_writer_pretty(w, variations)?;
    Ok(path.to_path_buf())
}
