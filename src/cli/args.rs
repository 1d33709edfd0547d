//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Compose document-head tags from page files
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Site defaults file, searched upward from the current directory
    #[arg(short = 'C', long, default_value = headkit::config::SITE_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compose the head of each page
    #[command(visible_alias = "c")]
    Compose {
        #[command(flatten)]
        args: ComposeArgs,
    },

    /// Load and validate pages without composing
    #[command(visible_alias = "k")]
    Check {
        #[command(flatten)]
        pages: PageArgs,
    },
}

/// Arguments shared by every page-reading command.
#[derive(clap::Args, Debug, Clone)]
pub struct PageArgs {
    /// Page files (`.toml` or `.json`)
    #[arg(value_name = "FILE", required = true, value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Compose command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub pages: PageArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write `<stem>.json` / `<stem>.html` into this directory instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

/// Shape of composed output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Head descriptor as JSON
    Json,
    /// Ready-to-inject `<head>` elements
    Html,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }
}

impl Cli {
    pub fn pages(&self) -> &PageArgs {
        match &self.command {
            Commands::Compose { args } => &args.pages,
            Commands::Check { pages } => pages,
        }
    }
}
