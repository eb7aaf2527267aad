//! Command-line interface module.

mod args;
pub mod build;
pub mod resolve;

pub use args::{BuildArgs, Cli, Commands, ResolveArgs};
