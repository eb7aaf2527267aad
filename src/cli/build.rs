//! Image build orchestration.
//!
//! Build phases:
//! - **Reset** - Remove the previous output root (completes before any work)
//! - **Scan** - Count the images that will produce artifacts
//! - **Transcode** - Parallel conversion into the output root
//! - **Report** - Summary and per-image failures

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    asset::{
        AssetRoute, PROGRESS_COUNTER, TranscodeReport, Transcoder, reset_output, scan_image_assets,
    },
    cli::BuildArgs,
    config::SiteConfig,
    image::WebpEncoder,
    log,
    logger::ProgressLine,
    utils::plural_count,
};

/// Run the transcoding pass for the configured asset tree.
///
/// Per-image failures are logged and returned in the report. Structural
/// failures abort the pass and are returned as errors.
pub fn build_images(config: &SiteConfig, args: &BuildArgs) -> Result<TranscodeReport> {
    let source_root = config.source_root();
    let output_root = config.output_root();

    if args.dry_run {
        print_plan(source_root, &scan_image_assets(source_root, &output_root));
        return Ok(TranscodeReport::default());
    }

    reset_output(&output_root);

    let routes = scan_image_assets(source_root, &output_root);
    let progress = create_progress(routes.len(), args.quiet);

    let result = Transcoder::new(source_root, &output_root, &WebpEncoder)
        .quality(config.assets.quality)
        .progress(progress.as_ref())
        .run();

    if let Some(p) = progress {
        p.finish();
    }

    let report = result
        .with_context(|| format!("image build failed under `{}`", source_root.display()))?;

    if !args.quiet {
        log_build_result(&report, &output_root);
    }

    Ok(report)
}

/// Remove the output root.
pub fn clean_output(config: &SiteConfig) {
    let output_root = config.output_root();
    if reset_output(&output_root) {
        log!("clean"; "removed {}", output_root.display());
    } else if !output_root.exists() {
        log!("clean"; "nothing to remove at {}", output_root.display());
    }
}

fn create_progress(total: usize, quiet: bool) -> Option<ProgressLine> {
    if quiet || total == 0 {
        return None;
    }
    Some(ProgressLine::new(&[(PROGRESS_COUNTER, total)]))
}

/// List source → artifact pairs relative to the asset root.
fn print_plan(source_root: &Path, routes: &[AssetRoute]) {
    for route in routes {
        let output = route
            .output
            .strip_prefix(source_root)
            .unwrap_or(&route.output);
        log!("plan"; "{} -> {}", route.relative_source(source_root), output.display());
    }
    log!("plan"; "{} would be written", plural_count(routes.len(), "file"));
}

fn log_build_result(report: &TranscodeReport, output_root: &Path) {
    log!(
        "build";
        "{} converted, {} copied, {} already optimized",
        plural_count(report.converted, "image"),
        report.copied,
        report.skipped
    );

    if report.has_failures() {
        log!(
            "warning";
            "{} failed to convert and {} skipped:",
            plural_count(report.failed_count(), "image"),
            if report.failed_count() == 1 { "was" } else { "were" }
        );
        for failure in &report.failures {
            eprintln!("- {}: {}", failure.path.display(), failure.message);
        }
    }

    if report.written() > 0 {
        log!("build"; "output written to {}", output_root.display());
    } else {
        log!("warning"; "no images written, check the asset root");
    }
}
