use crate::error::{DbalError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Connection parameters the driver adapter cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Server version string, e.g. `IBM Informix Dynamic Server Version 11.50.FC6`.
    /// When set, the platform is chosen from it instead of the default.
    pub server_version: Option<String>,
}

impl DriverConfig {
    pub fn with_server_version(version: impl Into<String>) -> Self {
        Self {
            server_version: Some(version.into()),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DbalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
