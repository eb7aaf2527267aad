//! WebP encoding via libwebp.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::{DynamicImage, ImageReader};
use webp::{Encoder, WebPConfig};

use super::{EncodingProfile, ImageEncoder};

/// Decodes with `image`, encodes with libwebp.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebpEncoder;

impl ImageEncoder for WebpEncoder {
    fn encode(&self, source: &Path, profile: EncodingProfile) -> Result<Vec<u8>> {
        // Format comes from the file content, not the extension
        let img = ImageReader::open(source)
            .and_then(ImageReader::with_guessed_format)
            .with_context(|| format!("failed to read `{}`", source.display()))?
            .decode()
            .with_context(|| format!("failed to decode `{}`", source.display()))?;
        encode_webp(&img, profile)
    }
}

/// Encode a decoded image with the given profile.
pub fn encode_webp(img: &DynamicImage, profile: EncodingProfile) -> Result<Vec<u8>> {
    // libwebp only takes 8-bit RGB/RGBA
    let img = if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    };

    let encoder = Encoder::from_image(&img).map_err(|e| anyhow!("unsupported pixel layout: {e}"))?;
    let config = webp_config(profile)?;
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| anyhow!("webp encoding failed: {e:?}"))?;

    Ok(memory.to_vec())
}

fn webp_config(profile: EncodingProfile) -> Result<WebPConfig> {
    let mut config = WebPConfig::new().map_err(|()| anyhow!("failed to initialize webp config"))?;
    config.quality = f32::from(profile.quality);
    if profile.lossless {
        config.lossless = 1;
    }
    if profile.near_lossless {
        // 100 disables preprocessing; lower values trade fidelity for size
        config.near_lossless = i32::from(profile.quality);
    }
    Ok(config)
}
