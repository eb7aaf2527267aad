//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`)
//! - [`route`]: URL reference helpers (`is_external_link`, `strip_one_slash`)

pub mod fs;
pub mod route;

pub use fs::normalize_path;
