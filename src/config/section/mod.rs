//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blogimg.toml`:
//!
//! | Module    | TOML Section  | Purpose                                  |
//! |-----------|---------------|------------------------------------------|
//! | `assets`  | `[assets]`    | Asset root, output root name, quality    |
//! | `resolve` | `[resolve]`   | Deployment base path for delivery URLs   |

mod assets;
mod resolve;

pub use assets::AssetsConfig;
pub use resolve::ResolveConfig;
