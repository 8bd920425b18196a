//! Command-line interface
//!
//! A thin caller around the library: `render` writes one of the known config
//! files from a data bag file, `path` prints where it would land.

pub mod commands;
pub mod types;

// Re-export commonly used items
pub use types::{Cli, Commands, ConfigKind, PathArgs, RenderArgs};
