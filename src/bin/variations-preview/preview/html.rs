#![forbid(unsafe_code)]

use anyhow::Result;
use logo_variations::LogoVariation;
use std::fs::File;
use std::io::{BufWriter, Write};

#[inline]
fn score_label(variation: &LogoVariation) -> String {
    variation
        .score
        .map_or_else(|| "template".to_owned(), |score| format!("score {score:.2}"))
}

#[inline]
fn icon_label(variation: &LogoVariation) -> &str {
    variation.icon.as_ref().map_or("no icon", |icon| icon.id.as_str())
}

pub fn write_html_grid(
    title: &str,
    cols: usize,
    variations: &[LogoVariation],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat({cols},1fr);gap:8px;padding:8px}}
  .s{{aspect-ratio:3/2;border-radius:10px;display:flex;flex-direction:column;
      align-items:center;justify-content:center;gap:4px}}
  .i{{font-size:28px}}
  .b{{font-size:22px;font-weight:700}}
  .m{{font-size:11px;color:#aaa;padding:2px 4px}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    for variation in variations {
        writeln!(
            w,
            r#"<div><div class="s" style="background:{bg}">
  <span class="i" style="color:{icon}">&#9679; {icon_id}</span>
  <span class="b" style="color:{brand}">Brand</span>
  <span style="color:{slogan}">Slogan goes here</span>
</div><div class="m">{name} | {score}</div></div>"#,
            bg = variation.background_color,
            icon = variation.icon_color,
            icon_id = icon_label(variation),
            brand = variation.brand_name_color,
            slogan = variation.slogan_color,
            name = variation.name,
            score = score_label(variation),
        )?;
    }
    writeln!(w, "</div>")?;
    Ok(path.to_path_buf())
}
