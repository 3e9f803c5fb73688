use image::RgbaImage;
use image::imageops::FilterType;

use crate::foundation::error::{SpriteError, SpriteResult};
use crate::scene::document::MAX_CANVAS_PX;

/// Render and resample sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterOpts {
    /// Square size the SVG is rendered at before downsampling.
    pub supersample_px: u32,
    /// Final square artifact size.
    pub target_px: u32,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            supersample_px: 768,
            target_px: 512,
        }
    }
}

impl RasterOpts {
    /// Supersampling must actually downsample: `0 < target_px < supersample_px`.
    pub fn validate(&self) -> SpriteResult<()> {
        if self.target_px == 0 {
            return Err(SpriteError::validation("target_px must be non-zero"));
        }
        if self.supersample_px <= self.target_px {
            return Err(SpriteError::validation(format!(
                "supersample_px ({}) must be larger than target_px ({})",
                self.supersample_px, self.target_px
            )));
        }
        if self.supersample_px > MAX_CANVAS_PX {
            return Err(SpriteError::validation(format!(
                "supersample_px too large: {} (max {MAX_CANVAS_PX})",
                self.supersample_px
            )));
        }
        Ok(())
    }
}

/// Parse an SVG document, render it at the supersample size and Lanczos3-resample to the target.
///
/// Output is straight (non-premultiplied) RGBA8 of exactly `target_px` square.
#[tracing::instrument(level = "debug", skip(svg), fields(svg_bytes = svg.len()))]
pub fn rasterize(svg: &str, opts: &RasterOpts) -> SpriteResult<RgbaImage> {
    opts.validate()?;
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
        .map_err(|e| SpriteError::encoding(format!("svg parse failed: {e}")))?;

    let full = render_tree(&tree, opts.supersample_px)?;
    tracing::debug!(
        from = opts.supersample_px,
        to = opts.target_px,
        "downsampling with lanczos3"
    );
    Ok(image::imageops::resize(
        &full,
        opts.target_px,
        opts.target_px,
        FilterType::Lanczos3,
    ))
}

/// Render `tree` scaled to fill a `size`-pixel square.
pub fn render_tree(tree: &usvg::Tree, size: u32) -> SpriteResult<RgbaImage> {
    let tree_size = tree.size();
    if !tree_size.width().is_finite() || tree_size.width() <= 0.0 || tree_size.height() <= 0.0 {
        return Err(SpriteError::encoding("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| SpriteError::encoding("failed to allocate svg pixmap"))?;

    let sx = (size as f32) / tree_size.width();
    let sy = (size as f32) / tree_size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    RgbaImage::from_raw(size, size, data)
        .ok_or_else(|| SpriteError::encoding("pixmap size does not match raster buffer"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
