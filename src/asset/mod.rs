//! Image asset pipeline: build-time transcoding and request-time resolution.
//!
//! The transcoder ([`process`]) writes the output tree once per build; the
//! loader ([`resolve`]) later predicts URLs into that tree. They never talk
//! to each other; both go through the naming rules in [`kind`].

mod error;
mod kind;
mod process;
mod report;
mod resolve;
mod route;
mod scan;

// Types
pub use kind::DEFAULT_OUTPUT_NAME;
pub use report::TranscodeReport;
pub use route::AssetRoute;

// Scanning (pure functions)
pub use scan::scan_image_assets;

// Processing (side effects)
pub use process::{PROGRESS_COUNTER, Transcoder, reset_output};

// Resolution (pure)
pub use resolve::{ImageLoader, ImageRequest};
