//! Request-time image URL resolution.
//!
//! Predicts the delivery URL of a transcoded image from its source
//! reference alone. No filesystem access: the answer must agree with what
//! the transcoder wrote, and both sides agree only because they share the
//! rules in [`kind`](super::kind).
//!
//! ```text
//! /images/test.png       → /dist/images/test.webp?w=800&q=75
//! /images/test.keep.png  → /dist/images/test.keep.png
//! images/test.jpg        → /dist/images/test.webp?w=800
//! https://cdn.example/a  → https://cdn.example/a
//! ```

use std::fmt::Write as _;

use crate::utils::path::route::{is_external_link, is_protocol_relative, strip_one_slash};

use super::kind::{is_exempt, output_file_name, split_extension};

/// Parameters of a single image render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    pub src: &'a str,
    pub width: u32,
    pub quality: Option<u8>,
}

impl<'a> ImageRequest<'a> {
    pub const fn new(src: &'a str, width: u32) -> Self {
        Self {
            src,
            width,
            quality: None,
        }
    }

    pub const fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }
}

/// Resolves source references to delivery URLs.
///
/// Configured once with the output root name and the deployment base
/// path; holds no mutable state, so one instance can serve any number of
/// concurrent renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoader {
    /// `{base_path}/{output_name}`, e.g. `/dist` or `/blog/dist`
    prefix: String,
}

impl ImageLoader {
    /// Create a loader.
    ///
    /// `base_path` is the deployment sub-path (`""` for a root
    /// deployment); leading and trailing slashes are normalized.
    pub fn new(output_name: &str, base_path: &str) -> Self {
        let base = base_path.trim_matches('/');
        let output = output_name.trim_matches('/');
        let prefix = if base.is_empty() {
            format!("/{output}")
        } else {
            format!("/{base}/{output}")
        };
        Self { prefix }
    }

    /// Delivery URL for a request.
    ///
    /// External references (with a scheme, or protocol-relative) come back
    /// unchanged. Exempt PNGs keep their name and get no query string;
    /// everything else maps to `<path>.webp?w=<width>[&q=<quality>]`.
    pub fn resolve(&self, request: &ImageRequest<'_>) -> String {
        let src = request.src;
        if is_external_link(src) || is_protocol_relative(src) {
            return src.to_string();
        }

        let relative = strip_one_slash(src);
        let (dir, name) = match relative.rsplit_once('/') {
            Some((dir, name)) => (Some(dir), name),
            None => (None, relative),
        };

        let mut url = self.prefix.clone();
        if let Some(dir) = dir {
            url.push('/');
            url.push_str(dir);
        }
        url.push('/');
        url.push_str(&output_file_name(name));

        let exempt = split_extension(name).is_some_and(|(stem, ext)| is_exempt(ext, stem));
        if exempt {
            return url;
        }

        let _ = write!(url, "?w={}", request.width);
        if let Some(quality) = request.quality {
            let _ = write!(url, "&q={quality}");
        }
        url
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(super::kind::DEFAULT_OUTPUT_NAME, "")
    }
}
