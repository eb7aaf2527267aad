//! Configuration management for `blogimg.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [assets] and [resolve]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util           # config lookup, URL path extraction
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Without one, every field keeps its default
//! and paths resolve against the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{AssetsConfig, ResolveConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    asset::ImageLoader,
    cli::{Cli, Commands},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for by default.
pub const DEFAULT_CONFIG_NAME: &str = "blogimg.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blogimg.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: the config file's directory, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Asset tree and encoding settings
    pub assets: AssetsConfig,

    /// Delivery URL settings
    pub resolve: ResolveConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. A missing default config
    /// is fine; a missing config passed with `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(normalize_path(&path));
                config
            }
            None if cli.config != Path::new(DEFAULT_CONFIG_NAME) => {
                bail!(ConfigError::NotFound(cli.config.clone()))
            }
            None => Self::default(),
        };

        let root = config
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or(cwd, Path::to_path_buf);

        config.finalize(cli, &root);
        config.validate()?;

        match &config.config_path {
            Some(path) => debug!("config"; "loaded {}", path.display()),
            None => debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME),
        }

        Ok(config)
    }

    /// Apply CLI overrides and resolve paths against `root`.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        self.root = normalize_path(root);
        self.apply_command_options(cli);
        self.assets.normalize(&self.root);
        self.resolve.sync_base_path_from_url();
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Public asset root holding the original images.
    pub fn source_root(&self) -> &Path {
        &self.assets.root
    }

    /// Output root inside the asset root.
    pub fn output_root(&self) -> PathBuf {
        self.assets.output_root()
    }

    /// Path resolver agreeing with the transcoder's output layout.
    pub fn image_loader(&self) -> ImageLoader {
        ImageLoader::new(&self.assets.output, &self.resolve.base_path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and command-specific CLI options.
    fn apply_command_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.assets.root, cli.root.as_ref());
        Self::update_option(&mut self.assets.output, cli.output.as_ref());

        match &cli.command {
            Commands::Build { build_args } => {
                crate::logger::set_verbose(build_args.verbose);
                Self::update_option(&mut self.assets.quality, build_args.quality.as_ref());
            }
            Commands::Clean => {}
            Commands::Resolve { args } => {
                Self::update_option(&mut self.resolve.base_path, args.base_path.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate all sections, reporting every error at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.assets.validate(&mut diag);
        self.resolve.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["blogimg"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn finalized(content: &str, args: &[&str], root: &Path) -> SiteConfig {
        let (mut config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        config.finalize(&cli(args), root);
        config
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[assets\nquality = 80").is_err());
    }

    #[test]
    fn test_defaults_without_file() {
        let config = SiteConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.assets.output, "dist");
        assert_eq!(config.assets.quality, 80);
        assert_eq!(config.resolve.base_path, "");
    }

    #[test]
    fn test_full_config() {
        let dir = TempDir::new().unwrap();
        let content = r#"
[assets]
root = "static"
output = "optimized"
quality = 70

[resolve]
site_url = "https://user.github.io/blog/"
"#;
        let config = finalized(content, &["build"], dir.path());
        let root = normalize_path(dir.path());

        assert_eq!(config.source_root(), root.join("static"));
        assert_eq!(config.output_root(), root.join("static/optimized"));
        assert_eq!(config.assets.quality, 70);
        assert_eq!(config.resolve.base_path, "blog");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[assets]\nquality = 80\nformat = \"avif\"\n[cdn]\nhost = \"x\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.assets.quality, 80);
        assert!(ignored.iter().any(|f| f.contains("assets.format")));
        assert!(ignored.iter().any(|f| f.contains("cdn")));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = TempDir::new().unwrap();
        let content = "[assets]\nroot = \"public\"\nquality = 90";
        let config = finalized(
            content,
            &["--root", "static", "--output", "out", "build", "--quality", "55"],
            dir.path(),
        );

        let root = normalize_path(dir.path());
        assert_eq!(config.source_root(), root.join("static"));
        assert_eq!(config.output_root(), root.join("static/out"));
        assert_eq!(config.assets.quality, 55);
    }

    #[test]
    fn test_resolve_base_path_override() {
        let dir = TempDir::new().unwrap();
        let content = "[resolve]\nsite_url = \"https://example.com/blog\"";
        let config = finalized(
            content,
            &["resolve", "/images/a.png", "--width", "640", "--base-path", "docs"],
            dir.path(),
        );
        assert_eq!(config.resolve.base_path, "docs");
        assert_eq!(
            config.image_loader().resolve(&crate::asset::ImageRequest::new("/images/a.png", 640)),
            "/docs/dist/images/a.webp?w=640"
        );
    }

    #[test]
    fn test_invalid_output_rejected() {
        let dir = TempDir::new().unwrap();
        let config = finalized("", &["--output", "out/dist", "build"], dir.path());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("out/dist"));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, "[assets]\nquality = 42\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.assets.quality, 42);

        let missing = SiteConfig::from_path(&dir.path().join("missing.toml"));
        assert!(missing.is_err());
    }
}
