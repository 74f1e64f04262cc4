//! ogmeta - Open Graph and Twitter Card tags for CMS page heads.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod page;
mod seo;
mod utils;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, find_config_file};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}

/// Locate and load the config file.
///
/// `render` falls back to built-in defaults when no file is found; `check`
/// needs a file to check.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    match find_config_file(&cli.config) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            SiteConfig::load(&path)
        }
        None if cli.is_check() => bail!("config file `{}` not found", cli.config.display()),
        None => {
            log!("warning"; "config file `{}` not found, using defaults", cli.config.display());
            Ok(SiteConfig::default())
        }
    }
}
