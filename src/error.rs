use std::path::PathBuf;
use thiserror::Error;
use version::VersionError;

#[derive(Error, Debug)]
pub enum DbalError {
    #[error("{0}")]
    InvalidPlatformVersion(#[from] VersionError),

    #[error("Driver error: {0}")]
    Driver(#[from] exception::DriverException),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl DbalError {
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPlatformVersion(err) => err.user_message(),
            Self::Driver(err) => format!("{} [{}]", err, err.category()),
            Self::Io { path, source } => {
                format!("Could not read {}: {source}", path.display())
            }
            Self::Config(err) => format!("Invalid driver configuration: {err}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbalError>;
