//! Asset scanning functions (pure, no side effects).

use std::path::Path;

use super::AssetRoute;

/// Scan the asset root for every image that will produce an artifact.
///
/// Used for progress totals and dry runs. Unreadable directories are
/// skipped here; the transcoder reports them as structural failures.
///
/// Results are sorted by source path.
pub fn scan_image_assets(source_root: &Path, output_root: &Path) -> Vec<AssetRoute> {
    let mut results = Vec::new();
    scan_recursive(&mut results, source_root, source_root, output_root);
    results.sort_by(|a, b| a.source.cmp(&b.source));
    results
}

fn scan_recursive(
    results: &mut Vec<AssetRoute>,
    dir: &Path,
    source_root: &Path,
    output_root: &Path,
) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            if path != output_root {
                scan_recursive(results, &path, source_root, output_root);
            }
            continue;
        }

        if let Ok(route) = AssetRoute::from_source(source_root, output_root, &path)
            && route.kind.produces_output()
        {
            results.push(route);
        }
    }
}
