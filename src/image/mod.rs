//! Image encoding for the delivery format.
//!
//! # Modules
//!
//! - [`encoder`]: libwebp-backed encoder used by the build

mod encoder;

use std::path::Path;

use anyhow::Result;

pub use encoder::WebpEncoder;

/// Delivery quality used when none is configured.
pub const DEFAULT_QUALITY: u8 = 80;

/// Encoder settings derived from the source extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingProfile {
    /// Quality (0-100); for lossless modes this is the near-lossless level.
    pub quality: u8,
    pub lossless: bool,
    pub near_lossless: bool,
}

impl EncodingProfile {
    /// Profile for a source extension. PNG sources get lossless with
    /// near-lossless preprocessing; everything else is lossy.
    pub fn for_extension(ext: &str, quality: u8) -> Self {
        let png = ext.eq_ignore_ascii_case("png");
        Self {
            quality,
            lossless: png,
            near_lossless: png,
        }
    }
}

/// Re-encodes a source image into delivery-format bytes.
///
/// Decoding must validate the source before any output is produced.
pub trait ImageEncoder: Sync {
    fn encode(&self, source: &Path, profile: EncodingProfile) -> Result<Vec<u8>>;
}
