//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// File-based routing for React projects
#[derive(Parser)]
#[command(
    name = "routegen",
    version = env!("CARGO_PKG_VERSION"),
    about = "File-based routing generator for React projects",
    long_about = "Derives routes from page files and keeps a generated routing module in sync.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to a custom routegen.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize file-based routing in a React project
    #[command(about = "Create the pages directory and seed the routing module")]
    Init {
        /// Re-seed the routing module even if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Watch the pages directory and keep routes in sync
    #[command(
        about = "Watch pages for changes and regenerate the routing module",
        after_help = "Examples:\n  routegen watch\n  routegen watch --debounce-ms 500\n  ROUTEGEN_LOGGING__DEFAULT=debug routegen watch"
    )]
    Watch {
        /// Write-stability window in milliseconds (overrides config)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}
