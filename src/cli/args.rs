//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Open Graph / Twitter Card head tag resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: ogmeta.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "ogmeta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve tags for a page context and print the merged head
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Load and validate the config file
    #[command(visible_alias = "c")]
    Check,
}

/// Output of the render command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Merged head fragments, one per line
    #[default]
    Html,
    /// Selected tag set as a JSON object
    Json,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Page context JSON file. Use `-` to read from stdin.
    #[arg(value_name = "CONTEXT", value_hint = clap::ValueHint::FilePath)]
    pub context: PathBuf,

    /// Existing head fragments, one per line
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub head: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}
