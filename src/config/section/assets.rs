//! `[assets]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! root = "public"    # public asset root, relative to blogimg.toml
//! output = "dist"    # output root name, created inside `root`
//! quality = 80       # delivery quality for converted images
//! ```

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::asset::DEFAULT_OUTPUT_NAME;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::DEFAULT_QUALITY;
use crate::utils::path::normalize_path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Public asset root holding the original images.
    pub root: PathBuf,

    /// Name of the output root created directly inside the asset root.
    pub output: String,

    /// Delivery quality passed to the encoder (0-100).
    pub quality: u8,
}

/// Field paths of the `[assets]` section.
pub struct AssetsConfigFields {
    pub root: FieldPath,
    pub output: FieldPath,
    pub quality: FieldPath,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: "public".into(),
            output: DEFAULT_OUTPUT_NAME.into(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl AssetsConfig {
    pub const FIELDS: AssetsConfigFields = AssetsConfigFields {
        root: FieldPath::new("assets.root"),
        output: FieldPath::new("assets.output"),
        quality: FieldPath::new("assets.quality"),
    };

    /// Resolve the asset root against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.root = normalize_path(&root.join(&self.root));
    }

    /// Absolute output root (`<asset root>/<output name>`).
    pub fn output_root(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// Validate field values.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.root.exists() && !self.root.is_dir() {
            diag.error(
                Self::FIELDS.root,
                format!("`{}` is not a directory", self.root.display()),
            );
        }

        if self.quality > 100 {
            diag.error(
                Self::FIELDS.quality,
                format!("quality must be between 0 and 100, got {}", self.quality),
            );
        }

        if !is_single_segment(&self.output) {
            diag.error_with_hint(
                Self::FIELDS.output,
                format!("`{}` is not a single directory name", self.output),
                format!("the output root always lives inside the asset root, e.g. `{DEFAULT_OUTPUT_NAME}`"),
            );
        }
    }
}

/// True for a non-empty name with exactly one normal path component.
fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
