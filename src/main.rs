//! blogimg - build-time image optimization for static blogs.
//!
//! `build` mirrors the public asset root into an output root with every
//! raster image re-encoded for delivery. `resolve` maps an image reference
//! written in a page to the URL of that optimized copy.

mod asset;
mod cli;
mod config;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => {
            cli::build::build_images(&config, build_args).map(|_| ())
        }
        Commands::Clean => {
            cli::build::clean_output(&config);
            Ok(())
        }
        Commands::Resolve { args } => cli::resolve::run_resolve(&config, args),
    }
}
