//! Asset classification and the naming rules shared by build and request time.
//!
//! Both the transcoder and the [`ImageLoader`](super::ImageLoader) derive
//! output names from the helpers in this module, never from file content.
//! Changing any rule here changes both sides at once.

use std::path::Path;

/// Extensions recognized as raster images (lowercase, without dot).
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Extension of the delivery format.
pub const DELIVERY_EXT: &str = "webp";

/// Name marker that exempts a PNG from re-encoding.
pub const KEEP_MARKER: &str = ".keep";

/// Default name of the output root under the asset root.
pub const DEFAULT_OUTPUT_NAME: &str = "dist";

/// Classification of an entry found under the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Recurse into it.
    Directory,
    /// Not a recognized image, ignored.
    NonImage,
    /// Already in the delivery format, ignored.
    AlreadyOptimized,
    /// `.keep`-marked PNG, copied byte-for-byte.
    Exempt,
    /// Re-encoded to the delivery format.
    Convertible,
}

impl AssetKind {
    /// Classify a directory entry.
    pub fn classify(path: &Path, is_dir: bool) -> Self {
        if is_dir {
            return Self::Directory;
        }
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(Self::NonImage, Self::from_file_name)
    }

    /// Classify a file by name alone.
    pub fn from_file_name(name: &str) -> Self {
        let Some((stem, ext)) = split_extension(name) else {
            return Self::NonImage;
        };
        let ext = ext.to_ascii_lowercase();

        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::NonImage
        } else if ext == DELIVERY_EXT {
            Self::AlreadyOptimized
        } else if is_exempt(&ext, stem) {
            Self::Exempt
        } else {
            Self::Convertible
        }
    }

    /// Whether this kind produces an artifact in the output root.
    pub const fn produces_output(self) -> bool {
        matches!(self, Self::Exempt | Self::Convertible)
    }
}

/// Split a file name into `(stem, extension)` at the last dot.
///
/// Names without a dot and dotfiles like `.png` have no extension.
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    let (stem, ext) = name.rsplit_once('.')?;
    (!stem.is_empty()).then_some((stem, ext))
}

/// Lowercased extension of a path, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    split_extension(name).map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Exempt rule: a PNG whose stem contains [`KEEP_MARKER`] anywhere.
///
/// Substring match, so `keep.backup.png` and `a.keep.b.png` qualify too.
#[inline]
pub fn is_exempt(ext: &str, stem: &str) -> bool {
    ext.eq_ignore_ascii_case("png") && stem.contains(KEEP_MARKER)
}

/// Name of the artifact produced for a source file name.
///
/// Exempt files keep their name; everything else becomes `<stem>.webp`.
pub fn output_file_name(name: &str) -> String {
    match split_extension(name) {
        Some((stem, ext)) if is_exempt(ext, stem) => name.to_string(),
        Some((stem, _)) => format!("{stem}.{DELIVERY_EXT}"),
        None => format!("{name}.{DELIVERY_EXT}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_images() {
        assert_eq!(AssetKind::from_file_name("a.jpg"), AssetKind::Convertible);
        assert_eq!(AssetKind::from_file_name("a.jpeg"), AssetKind::Convertible);
        assert_eq!(AssetKind::from_file_name("a.png"), AssetKind::Convertible);
        assert_eq!(AssetKind::from_file_name("a.JPG"), AssetKind::Convertible);
        assert_eq!(
            AssetKind::from_file_name("a.webp"),
            AssetKind::AlreadyOptimized
        );
        assert_eq!(
            AssetKind::from_file_name("a.WebP"),
            AssetKind::AlreadyOptimized
        );
    }

    #[test]
    fn test_classify_non_images() {
        assert_eq!(AssetKind::from_file_name("notes.md"), AssetKind::NonImage);
        assert_eq!(AssetKind::from_file_name("logo.svg"), AssetKind::NonImage);
        assert_eq!(AssetKind::from_file_name("README"), AssetKind::NonImage);
        assert_eq!(AssetKind::from_file_name(".png"), AssetKind::NonImage);
        assert_eq!(AssetKind::from_file_name("trailing."), AssetKind::NonImage);
    }

    #[test]
    fn test_classify_exempt() {
        assert_eq!(AssetKind::from_file_name("test.keep.png"), AssetKind::Exempt);
        assert_eq!(AssetKind::from_file_name("test.keep.PNG"), AssetKind::Exempt);
        // Only PNGs are exempt
        assert_eq!(
            AssetKind::from_file_name("test.keep.jpg"),
            AssetKind::Convertible
        );
        // Marker needs the leading dot
        assert_eq!(
            AssetKind::from_file_name("keepsake.png"),
            AssetKind::Convertible
        );
    }

    #[test]
    fn test_marker_is_substring_match() {
        // Marker anywhere in the stem exempts the file, not only as a suffix
        assert_eq!(AssetKind::from_file_name("a.keep.b.png"), AssetKind::Exempt);
        assert_eq!(
            AssetKind::from_file_name("diagram.keeper.png"),
            AssetKind::Exempt
        );
        assert_eq!(
            AssetKind::from_file_name("old.keep.backup.png"),
            AssetKind::Exempt
        );
    }

    #[test]
    fn test_classify_directory() {
        assert_eq!(
            AssetKind::classify(Path::new("public/images.png"), true),
            AssetKind::Directory
        );
        assert_eq!(
            AssetKind::classify(Path::new("public/images/a.png"), false),
            AssetKind::Convertible
        );
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("test.png"), "test.webp");
        assert_eq!(output_file_name("photo.JPG"), "photo.webp");
        assert_eq!(output_file_name("archive.tar.jpeg"), "archive.tar.webp");
        assert_eq!(output_file_name("test.keep.png"), "test.keep.png");
        assert_eq!(output_file_name("test.keep.jpg"), "test.keep.webp");
        assert_eq!(output_file_name("noext"), "noext.webp");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b.PNG")).as_deref(), Some("png"));
        assert_eq!(extension_of(Path::new("a/b")), None);
    }

    #[test]
    fn test_produces_output() {
        assert!(AssetKind::Exempt.produces_output());
        assert!(AssetKind::Convertible.produces_output());
        assert!(!AssetKind::AlreadyOptimized.produces_output());
        assert!(!AssetKind::NonImage.produces_output());
        assert!(!AssetKind::Directory.produces_output());
    }
}
