//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_NAME;

/// Build-time image optimizer and delivery path resolver for static blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Public asset root (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Output root name, created inside the asset root
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Config file path (default: blogimg.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert every image under the asset root into the output root
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Remove the output root
    #[command(visible_alias = "c")]
    Clean,

    /// Print the delivery URL for an image reference
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Delivery quality for converted images (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// List what would be written without touching the output root
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Hide progress and summary output
    #[arg(long)]
    pub quiet: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Image reference as written in a page (e.g. `/images/hero.png`)
    #[arg(value_name = "SRC")]
    pub src: String,

    /// Requested rendering width in pixels
    #[arg(short, long)]
    pub width: u32,

    /// Requested quality, appended as `q=`
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,

    /// URL path prefix the site is deployed under
    #[arg(short, long)]
    pub base_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::try_parse_from(["blogimg", "b", "-q", "70", "--quiet"]).unwrap();
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.quality, Some(70));
        assert!(build_args.quiet);
        assert!(!build_args.dry_run);
        assert_eq!(cli.config, PathBuf::from("blogimg.toml"));
    }

    #[test]
    fn test_quality_range_checked() {
        assert!(Cli::try_parse_from(["blogimg", "build", "--quality", "101"]).is_err());
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::try_parse_from([
            "blogimg", "resolve", "/images/a.jpg", "-w", "800", "-q", "75", "--root", "static",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("static")));
        let Commands::Resolve { args } = cli.command else {
            panic!("expected resolve command");
        };
        assert_eq!(args.src, "/images/a.jpg");
        assert_eq!(args.width, 800);
        assert_eq!(args.quality, Some(75));
        assert_eq!(args.base_path, None);
    }

    #[test]
    fn test_resolve_requires_width() {
        assert!(Cli::try_parse_from(["blogimg", "resolve", "/images/a.jpg"]).is_err());
    }
}
