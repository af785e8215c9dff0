mod classify;
mod cli;
mod error;
mod platform;
mod server_version;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use tracing::Level;

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let verbose = cli.verbose;
    let result = match cli.command {
        Commands::Classify {
            code,
            message,
            sql,
            format,
        } => classify::execute(code, message, sql, format, verbose),
        Commands::Version { raw, format } => server_version::execute(raw, format, verbose),
        Commands::Platform {
            config,
            server_version,
        } => platform::execute(config, server_version, verbose),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
