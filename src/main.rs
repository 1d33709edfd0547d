//! Headkit - compose document-head tags from page files.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    headkit::logger::set_verbose(cli.pages().verbose);

    let site = cli::load_site(&cli.config)?;

    match &cli.command {
        Commands::Compose { args } => cli::compose::run_compose(args, site.as_ref()),
        Commands::Check { pages } => cli::check::run_check(pages, site.as_ref()),
    }
}
