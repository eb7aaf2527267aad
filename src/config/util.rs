//! Configuration lookup helpers.

use std::path::{Path, PathBuf};

/// Path component of a site URL, without surrounding slashes.
///
/// Returns `None` when `url_str` does not parse as an absolute URL.
///
/// ```ignore
/// extract_url_path("https://user.github.io/blog/") -> Some("blog")
/// extract_url_path("https://example.com")          -> Some("")
/// extract_url_path("blog")                         -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Search `start` and its ancestors for `config_name`.
///
/// An absolute `config_name` is returned as-is when it exists.
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://user.github.io/blog/"),
            Some("blog".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b?x=1#top"),
            Some("a/b".to_string())
        );
        assert_eq!(extract_url_path("https://example.com"), Some(String::new()));
        assert_eq!(extract_url_path("blog"), None);
    }

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("public/images/2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("blogimg.toml"), "").unwrap();

        let found = find_config_file(Path::new("blogimg.toml"), &nested);
        assert_eq!(found, Some(dir.path().join("blogimg.toml")));
    }

    #[test]
    fn test_find_config_nearest_wins() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("site");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("blogimg.toml"), "").unwrap();
        fs::write(nested.join("blogimg.toml"), "").unwrap();

        let found = find_config_file(Path::new("blogimg.toml"), &nested);
        assert_eq!(found, Some(nested.join("blogimg.toml")));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("blogimg.toml")).unwrap();
        let found = find_config_file(Path::new("blogimg.toml"), dir.path());
        assert_ne!(found, Some(dir.path().join("blogimg.toml")));
    }

    #[test]
    fn test_find_absolute_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&path, dir.path()), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }
}
