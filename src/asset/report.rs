//! Outcome of a transcoding run.

use std::path::PathBuf;

/// A per-asset failure that was logged and skipped.
#[derive(Debug, Clone)]
pub struct AssetFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Counters for a transcoding run.
///
/// Reports from sibling entries are merged at each directory level.
#[derive(Debug, Default, Clone)]
pub struct TranscodeReport {
    /// Images re-encoded to the delivery format
    pub converted: usize,
    /// Exempt images copied verbatim
    pub copied: usize,
    /// Images already in the delivery format
    pub skipped: usize,
    /// Images that failed to convert
    pub failures: Vec<AssetFailure>,
}

impl TranscodeReport {
    pub(super) fn converted() -> Self {
        Self {
            converted: 1,
            ..Self::default()
        }
    }

    pub(super) fn copied() -> Self {
        Self {
            copied: 1,
            ..Self::default()
        }
    }

    pub(super) fn skipped() -> Self {
        Self {
            skipped: 1,
            ..Self::default()
        }
    }

    pub(super) fn failed(path: PathBuf, message: String) -> Self {
        Self {
            failures: vec![AssetFailure { path, message }],
            ..Self::default()
        }
    }

    /// Combine two reports.
    pub fn merge(mut self, other: Self) -> Self {
        self.converted += other.converted;
        self.copied += other.copied;
        self.skipped += other.skipped;
        self.failures.extend(other.failures);
        self
    }

    /// Number of artifacts written to the output root.
    pub fn written(&self) -> usize {
        self.converted + self.copied
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let report = [
            TranscodeReport::converted(),
            TranscodeReport::converted(),
            TranscodeReport::copied(),
            TranscodeReport::skipped(),
            TranscodeReport::failed("bad.png".into(), "corrupt".into()),
        ]
        .into_iter()
        .fold(TranscodeReport::default(), TranscodeReport::merge);

        assert_eq!(report.converted, 2);
        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.written(), 3);
        assert_eq!(report.failed_count(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn test_default_is_empty() {
        let report = TranscodeReport::default();
        assert_eq!(report.written(), 0);
        assert!(!report.has_failures());
    }
}
