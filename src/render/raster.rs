use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::{
    error::{TicketError, TicketResult},
    math::unpremultiply_rgba8_in_place,
};

/// Largest accepted raster side, in pixels.
pub const MAX_RASTER_DIM: u32 = 8_192;

/// Parse an SVG document, resolving text against system fonts plus any fonts found in
/// `fonts_dir`.
pub fn parse_svg(svg: &str, fonts_dir: Option<&Path>) -> TicketResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: build_fontdb(fonts_dir),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts).context("parse ticket svg")?;
    Ok(tree)
}

fn build_fontdb(fonts_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = fonts_dir {
        db.load_fonts_dir(dir);
    }
    Arc::new(db)
}

/// Rasterize `tree` at `scale` into a straight-alpha RGBA image.
pub fn rasterize(tree: &usvg::Tree, scale: f32) -> TicketResult<image::RgbaImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(TicketError::render(format!("invalid raster scale {scale}")));
    }
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width == 0 || height == 0 || width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(TicketError::render(format!(
            "raster size out of range: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| TicketError::render("failed to allocate ticket pixmap"))?;
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba = pixmap.take();
    unpremultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| TicketError::render("rgba buffer size mismatch"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
