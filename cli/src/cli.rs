use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ifx-dbal")]
#[command(
    author,
    version,
    about = "Inspect how the Informix driver adapter classifies errors and server versions"
)]
pub struct Cli {
    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a native Informix error into a normalized category
    Classify {
        /// Driver error code, e.g. -239
        #[clap(short, long, default_value = "", allow_hyphen_values = true)]
        code: String,

        /// Error message reported by the client
        #[clap(short, long, default_value = "", allow_hyphen_values = true)]
        message: String,

        /// Statement that was running when the error happened
        #[clap(long)]
        sql: Option<String>,

        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse a server version string
    Version {
        /// Raw version string, e.g. "IBM Informix Dynamic Server Version 11.50.FC6"
        raw: String,

        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show which platform the driver selects for a configuration
    Platform {
        /// TOML file with driver settings (server_version)
        #[clap(short, long)]
        config: Option<PathBuf>,

        /// Server version string, overrides the one from the config file
        #[clap(long)]
        server_version: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
