//! SVG document -> RGBA8 raster, for previews and the `png` CLI command.
//!
//! Animations are not evaluated; the raster shows every stage at its resting attributes.

use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{CanvasError, CanvasResult};

/// Largest edge, in pixels, a raster may have after scaling.
pub const MAX_RASTER_EDGE: u32 = 16_384;

/// Straight (non-premultiplied) RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Pixel at `(x, y)` as `[r, g, b, a]`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

pub fn parse_document(document: &str) -> CanvasResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(document, &opts).context("parse svg document")?;
    Ok(tree)
}

#[tracing::instrument(skip(document), fields(bytes = document.len()))]
pub fn rasterize(document: &str, scale: f32) -> CanvasResult<RasterImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(CanvasError::export(format!(
            "scale must be finite and > 0, got {scale}"
        )));
    }
    let tree = parse_document(document)?;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    if width == 0 || height == 0 || width > MAX_RASTER_EDGE || height > MAX_RASTER_EDGE {
        return Err(CanvasError::export(format!(
            "raster size {width}x{height} outside 1..={MAX_RASTER_EDGE}"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CanvasError::export(format!("allocate {width}x{height} pixmap")))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    demultiply_rgba8_in_place(&mut data);
    tracing::debug!(width, height, "rasterized");
    Ok(RasterImage {
        width,
        height,
        data,
    })
}

pub fn write_png(img: &RasterImage, path: &Path) -> CanvasResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &img.data,
        img.width,
        img.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| CanvasError::export(format!("write png '{}': {e}", path.display())))
}

pub fn encode_png(img: &RasterImage) -> CanvasResult<Vec<u8>> {
    let buf = image::RgbaImage::from_raw(img.width, img.height, img.data.clone())
        .ok_or_else(|| CanvasError::export("pixel buffer does not match dimensions"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(buf)
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| CanvasError::export(format!("encode png: {e}")))?;
    Ok(out)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
