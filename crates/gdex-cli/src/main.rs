//! gdex binary entry point.

use clap::Parser;
use gdex_cli::{commands, Cli, Commands};
use std::process;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: failed to initialize logging");
    }

    let result = match &cli.command {
        Commands::Extract { input, output, config, keep_all } => {
            commands::extract::run(input, output, config.as_deref(), *keep_all).await
        }
        Commands::Load { input, output } => commands::load::run(input, output),
    };

    if let Err(e) = result {
        error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
