//! Raster stage: SVG document to PNG bytes.

use std::{io::Cursor, sync::Arc};

use anyhow::Context as _;

use crate::{
    fonts::{FontSet, FontWeight},
    foundation::{
        core::Canvas,
        error::{OgError, OgResult},
    },
    render::RenderedDocument,
};

/// Output width every image is fitted to.
pub const OUTPUT_WIDTH: u32 = 1200;

/// Encoded bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// PNG bytes.
    pub png: Vec<u8>,
}

/// Font database holding only the two cached faces, so text never falls back to a system font.
pub fn font_database(fonts: &FontSet) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    for weight in FontWeight::ALL {
        db.load_font_data(fonts.bytes(weight).to_vec());
    }
    let family = db
        .faces()
        .find_map(|f| f.families.first().map(|(name, _)| name.clone()));
    if let Some(family) = family {
        db.set_sans_serif_family(family);
    }
    Arc::new(db)
}

/// Rasterize `doc` at [`OUTPUT_WIDTH`] and encode it as PNG.
pub fn rasterize(doc: &RenderedDocument, fonts: &FontSet) -> OgResult<OutputImage> {
    rasterize_to_width(doc, fonts, OUTPUT_WIDTH)
}

/// Rasterize `doc` scaled to `target_width`, keeping its aspect ratio.
#[tracing::instrument(skip(doc, fonts))]
pub fn rasterize_to_width(
    doc: &RenderedDocument,
    fonts: &FontSet,
    target_width: u32,
) -> OgResult<OutputImage> {
    let opts = usvg::Options {
        fontdb: font_database(fonts),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(doc.as_str(), &opts).context("parse svg document")?;

    let (width, height, scale) = fit_to_width(&tree, target_width)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| OgError::render("failed to allocate raster pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| OgError::render("raster buffer size mismatch"))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .context("encode png")?;

    tracing::debug!(width, height, bytes = png.len(), "rasterized");
    Ok(OutputImage { width, height, png })
}

fn fit_to_width(tree: &usvg::Tree, target_width: u32) -> OgResult<(u32, u32, f32)> {
    let size = tree.size();
    let (w, h) = (size.width(), size.height());
    if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
        return Err(OgError::render("svg document has invalid width/height"));
    }
    if target_width == 0 {
        return Err(OgError::configuration("target width must be > 0"));
    }
    let canvas = Canvas::new(w.round().max(1.0) as u32, h.round().max(1.0) as u32)?;
    let height = canvas.height_for_width(target_width);
    let scale = target_width as f32 / w;
    Ok((target_width, height, scale))
}

#[cfg(test)]
#[path = "../tests/unit/raster.rs"]
mod tests;
