//! Filesystem path normalization.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// The asset root usually exists; its output root often does not yet,
/// which is why the fallback matters.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_absolute_missing() {
        let path = Path::new("/absolute/missing/public");
        assert_eq!(normalize_path(path), PathBuf::from("/absolute/missing/public"));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/public"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/public"));
    }

    #[test]
    fn test_normalize_path_existing_resolves_dots() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("public")).unwrap();
        let dotted = dir.path().join("public/../public");
        let normalized = normalize_path(&dotted);
        assert_eq!(normalized, dir.path().canonicalize().unwrap().join("public"));
    }
}
