//! Rasterization of scene documents.

/// SVG → supersampled pixmap → Lanczos3 downsample.
pub mod raster;
