//! Transcoding pass with side effects (encoding, copying, cleaning).
//!
//! ```text
//! public/                       public/dist/
//! ├── hero.jpg            →     ├── hero.webp
//! ├── hero.webp                 │   (already optimized, skipped)
//! ├── notes.txt                 │   (not an image, ignored)
//! └── posts/                    └── posts/
//!     ├── chart.png       →         ├── chart.webp   (lossless)
//!     └── logo.keep.png   →         └── logo.keep.png (copied)
//! ```

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::image::{DEFAULT_QUALITY, EncodingProfile, ImageEncoder};
use crate::logger::ProgressLine;
use crate::{debug, log};

use super::error::TranscodeError;
use super::kind::{AssetKind, extension_of};
use super::report::TranscodeReport;
use super::route::AssetRoute;

/// Progress counter name for processed images.
pub const PROGRESS_COUNTER: &str = "images";

/// Remove the output root and everything under it.
///
/// Best effort: a missing directory is fine, any other failure is logged
/// and swallowed so the build can go on. Returns whether a tree was
/// actually removed.
pub fn reset_output(output_root: &Path) -> bool {
    match fs::remove_dir_all(output_root) {
        Ok(()) => {
            debug!("clean"; "removed {}", output_root.display());
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            log!("error"; "failed to clean `{}`: {}", output_root.display(), e);
            false
        }
    }
}

/// Depth-first walk that mirrors the asset tree into the output root.
///
/// Siblings are processed in parallel; the collect at each directory is
/// the join point. Each entry writes only its own artifact, except that
/// `a.png` and `a.jpg` in one directory both target `a.webp` and the last
/// writer wins.
pub struct Transcoder<'a> {
    source_root: &'a Path,
    output_root: &'a Path,
    encoder: &'a dyn ImageEncoder,
    quality: u8,
    progress: Option<&'a ProgressLine>,
}

impl<'a> Transcoder<'a> {
    pub fn new(
        source_root: &'a Path,
        output_root: &'a Path,
        encoder: &'a dyn ImageEncoder,
    ) -> Self {
        Self {
            source_root,
            output_root,
            encoder,
            quality: DEFAULT_QUALITY,
            progress: None,
        }
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn progress(mut self, progress: Option<&'a ProgressLine>) -> Self {
        self.progress = progress;
        self
    }

    /// Run the pass over the whole tree.
    ///
    /// # Errors
    ///
    /// Structural failures only (unreadable directory, uncreatable output
    /// directory, failed copy). Per-asset conversion failures are logged
    /// and reported in [`TranscodeReport::failures`].
    pub fn run(&self) -> Result<TranscodeReport, TranscodeError> {
        self.transcode_dir(self.source_root)
    }

    fn transcode_dir(&self, dir: &Path) -> Result<TranscodeReport, TranscodeError> {
        let entries = read_entries(dir)?;

        let reports = entries
            .par_iter()
            .map(|(path, is_dir)| self.process_entry(path, *is_dir))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(reports
            .into_iter()
            .fold(TranscodeReport::default(), TranscodeReport::merge))
    }

    fn process_entry(&self, path: &Path, is_dir: bool) -> Result<TranscodeReport, TranscodeError> {
        match AssetKind::classify(path, is_dir) {
            // A stale output root (failed reset) must not be read back in
            AssetKind::Directory if path == self.output_root => {
                debug!("transcode"; "skipping output root {}", path.display());
                Ok(TranscodeReport::default())
            }
            AssetKind::Directory => self.transcode_dir(path),
            AssetKind::NonImage => Ok(TranscodeReport::default()),
            AssetKind::AlreadyOptimized => {
                debug!("transcode"; "already optimized: {}", self.display(path));
                Ok(TranscodeReport::skipped())
            }
            AssetKind::Exempt => self.copy_exempt(path),
            AssetKind::Convertible => self.convert(path),
        }
    }

    fn copy_exempt(&self, source: &Path) -> Result<TranscodeReport, TranscodeError> {
        let route = AssetRoute::from_source(self.source_root, self.output_root, source)?;
        ensure_dir(route.output_dir())?;

        fs::copy(&route.source, &route.output).map_err(|e| {
            TranscodeError::Copy(route.source.clone(), route.output.clone(), e)
        })?;

        debug!("transcode"; "copied {}", self.display(source));
        self.tick();
        Ok(TranscodeReport::copied())
    }

    fn convert(&self, source: &Path) -> Result<TranscodeReport, TranscodeError> {
        let route = AssetRoute::from_source(self.source_root, self.output_root, source)?;
        let ext = extension_of(source).unwrap_or_default();
        let profile = EncodingProfile::for_extension(&ext, self.quality);

        // Decode before touching the output tree
        let encoded = match self.encoder.encode(source, profile) {
            Ok(bytes) => bytes,
            Err(e) => return Ok(self.skip_failed(source, format!("{e:#}"))),
        };

        ensure_dir(route.output_dir())?;

        if let Err(e) = fs::write(&route.output, encoded) {
            let message = format!("failed to write `{}`: {e}", route.output.display());
            return Ok(self.skip_failed(source, message));
        }

        debug!("transcode"; "converted {}", self.display(source));
        self.tick();
        Ok(TranscodeReport::converted())
    }

    fn skip_failed(&self, source: &Path, message: String) -> TranscodeReport {
        log!("error"; "{}: {}, skipping", self.display(source), message);
        self.tick();
        TranscodeReport::failed(source.to_path_buf(), message)
    }

    fn tick(&self) {
        if let Some(progress) = self.progress {
            progress.inc(PROGRESS_COUNTER);
        }
    }

    /// Path relative to the asset root, for logging.
    fn display(&self, path: &Path) -> String {
        path.strip_prefix(self.source_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Create `dir` (and parents) unless it already exists.
///
/// Concurrent siblings may race on the same directory; "already exists"
/// is success.
fn ensure_dir(dir: &Path) -> Result<(), TranscodeError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| TranscodeError::CreateDir(dir.to_path_buf(), e))
}

/// List a directory as `(path, is_dir)` pairs.
fn read_entries(dir: &Path) -> Result<Vec<(PathBuf, bool)>, TranscodeError> {
    let read_err = |e: io::Error| TranscodeError::ReadDir(dir.to_path_buf(), e);

    fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| {
            let entry = entry.map_err(read_err)?;
            let is_dir = entry.file_type().map_err(read_err)?.is_dir();
            Ok((entry.path(), is_dir))
        })
        .collect()
}
