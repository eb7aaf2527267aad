//! Asset route: source → output mapping.

use std::path::{Path, PathBuf};

use super::error::TranscodeError;
use super::kind::{AssetKind, output_file_name};

/// Route information for an image asset.
///
/// The output path depends only on the source path relative to the asset
/// root and on the file name, never on file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    /// Source file path
    pub source: PathBuf,
    /// Artifact path under the output root
    pub output: PathBuf,
    /// Classification of the source
    pub kind: AssetKind,
}

impl AssetRoute {
    /// Map a source file to its artifact under `output_root`.
    ///
    /// The relative directory is taken against the root of the whole asset
    /// tree, so nesting depth is preserved whatever the recursion level.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError::OutsideRoot`] if `source` is not under
    /// `source_root`.
    pub fn from_source(
        source_root: &Path,
        output_root: &Path,
        source: &Path,
    ) -> Result<Self, TranscodeError> {
        let relative = source
            .strip_prefix(source_root)
            .map_err(|_| TranscodeError::OutsideRoot(source.to_path_buf(), source_root.into()))?;
        let name = relative
            .file_name()
            .ok_or_else(|| TranscodeError::OutsideRoot(source.to_path_buf(), source_root.into()))?
            .to_string_lossy();

        let rel_dir = relative.parent().unwrap_or(Path::new(""));
        let output = output_root.join(rel_dir).join(output_file_name(&name));

        Ok(Self {
            source: source.to_path_buf(),
            output,
            kind: AssetKind::from_file_name(&name),
        })
    }

    /// Directory the artifact is written into.
    pub fn output_dir(&self) -> &Path {
        self.output.parent().unwrap_or(Path::new(""))
    }

    /// Source path relative to `source_root`, with forward slashes.
    ///
    /// This is the form the page layer hands to the image loader.
    pub fn relative_source(&self, source_root: &Path) -> String {
        let rel = self.source.strip_prefix(source_root).unwrap_or(&self.source);
        rel.to_string_lossy().replace('\\', "/")
    }
}
