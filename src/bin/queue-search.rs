mod commands;

use clap::Parser;
use commands::{execute_command, Commands};
use queue_search::Settings;
use std::path::PathBuf;

/// Search a track queue and convert durations
#[derive(Parser)]
#[command(
    name = "queue-search",
    about = "Search a track queue and convert durations",
    long_about = None
)]
struct Cli {
    /// Show debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Settings file (defaults to $XDG_CONFIG_HOME/queue-search/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = match Settings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load settings: {e}");
            std::process::exit(1);
        }
    };
    log::debug!("Using settings: {settings:?}");

    if let Err(e) = execute_command(args.command, &settings) {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }
}
