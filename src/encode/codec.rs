use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder as _, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SpriteError, SpriteResult};

/// Output container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossless WebP.
    #[default]
    WebP,
    /// PNG.
    Png,
}

impl ImageFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::WebP => "webp",
            Self::Png => "png",
        }
    }
}

/// Compression effort. Only PNG honors it; the WebP encoder has a single lossless mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    /// Fastest, largest output.
    Fast,
    /// Encoder default.
    Default,
    /// Slowest, smallest output.
    #[default]
    Best,
}

/// Encoder options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOpts {
    /// Container format.
    pub format: ImageFormat,
    /// Compression effort.
    pub effort: Effort,
}

impl EncodeOpts {
    /// Artifact file name for a creature id.
    pub fn file_name(&self, id: &str) -> String {
        format!("{id}.{}", self.format.extension())
    }

    /// Whether [`Effort`] changes the encoded output for this format.
    pub fn effort_applies(&self) -> bool {
        self.format == ImageFormat::Png
    }
}

/// Encode a straight-alpha RGBA raster.
#[tracing::instrument(level = "debug", skip(img), fields(w = img.width(), h = img.height()))]
pub fn encode(img: &RgbaImage, opts: &EncodeOpts) -> SpriteResult<Vec<u8>> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(SpriteError::encoding("cannot encode an empty raster"));
    }

    let mut out = Vec::new();
    match opts.format {
        ImageFormat::WebP => WebPEncoder::new_lossless(&mut out)
            .encode(img.as_raw(), w, h, ExtendedColorType::Rgba8)
            .map_err(|e| SpriteError::encoding(format!("webp encode failed: {e}")))?,
        ImageFormat::Png => {
            let compression = match opts.effort {
                Effort::Fast => CompressionType::Fast,
                Effort::Default => CompressionType::Default,
                Effort::Best => CompressionType::Best,
            };
            PngEncoder::new_with_quality(&mut out, compression, PngFilter::Adaptive)
                .write_image(img.as_raw(), w, h, ExtendedColorType::Rgba8)
                .map_err(|e| SpriteError::encoding(format!("png encode failed: {e}")))?
        }
    }
    tracing::debug!(bytes = out.len(), format = opts.format.extension(), "encoded");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/codec.rs"]
mod tests;
