//! Structural transcoding errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that make the rest of the tree untrustworthy.
///
/// Per-asset problems (bad image data, encoder rejection) are not errors
/// here; they are recorded as [`AssetFailure`](super::report::AssetFailure)s.
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("failed to read directory `{0}`")]
    ReadDir(PathBuf, #[source] io::Error),

    #[error("failed to create output directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("failed to copy `{0}` to `{1}`")]
    Copy(PathBuf, PathBuf, #[source] io::Error),

    #[error("`{0}` is not inside the asset root `{1}`")]
    OutsideRoot(PathBuf, PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn test_transcode_error_display() {
        let err = TranscodeError::ReadDir(
            PathBuf::from("public/locked"),
            io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        let display = format!("{err}");
        assert!(display.contains("public/locked"));
        assert!(err.source().is_some());
    }
}
