//! Command-line interface module.

mod args;
pub mod check;
pub mod render;

pub use args::{Cli, Commands, OutputFormat, RenderArgs};
