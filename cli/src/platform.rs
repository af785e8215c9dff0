use crate::error::{CliError, Result};
use crate::ui;
use informix_dbal::{DriverConfig, InformixDriver};
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, server_version: Option<String>, verbose: bool) -> Result<()> {
    let mut driver_config = match &config {
        Some(path) => DriverConfig::load(path).map_err(|e| {
            CliError::Dbal(e).with_context(format!("Failed to load {}", path.display()))
        })?,
        None => DriverConfig::default(),
    };

    if server_version.is_some() {
        driver_config.server_version = server_version;
    }

    if verbose {
        match &driver_config.server_version {
            Some(v) => println!("Selecting platform for server version '{v}'"),
            None => println!("No server version configured, using the default platform"),
        }
    }

    let platform = InformixDriver::new().platform_for(&driver_config)?;
    ui::success_message(&format!("Platform: {platform}"));

    Ok(())
}
