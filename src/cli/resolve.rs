//! `resolve` command: print the delivery URL for one image reference.

use std::io::{Write, stdout};

use anyhow::Result;

use crate::{asset::ImageRequest, cli::ResolveArgs, config::SiteConfig, debug};

pub fn run_resolve(config: &SiteConfig, args: &ResolveArgs) -> Result<()> {
    let mut request = ImageRequest::new(&args.src, args.width);
    if let Some(quality) = args.quality {
        request = request.with_quality(quality);
    }
    let url = config.image_loader().resolve(&request);
    debug!("resolve"; "{} -> {}", args.src, url);

    let mut out = stdout().lock();
    writeln!(out, "{url}")?;
    Ok(())
}
