use clap::Parser;

use routegen::cli::{Cli, Commands, commands};
use routegen::config::Settings;
use routegen::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration for now.");
        Settings::default()
    });

    logging::init_with_config(&settings.logging);

    match cli.command {
        Commands::Init { force } => commands::init::run(&settings, force).await,
        Commands::Watch { debounce_ms } => commands::watch::run(&settings, debounce_ms).await,
        Commands::Config => commands::config::run(&settings),
    }
}
