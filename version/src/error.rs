use std::result;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error(
        "Invalid platform version \"{version}\" specified. The platform version has to be specified in the format: \"{expected_format}\"."
    )]
    MalformedVersionString {
        version: String,
        expected_format: String,
    },
}

impl VersionError {
    pub fn malformed<V: Into<String>>(version: V) -> Self {
        VersionError::MalformedVersionString {
            version: version.into(),
            expected_format: crate::EXPECTED_FORMAT.to_string(),
        }
    }

    /// Get a user-friendly message for command line display
    pub fn user_message(&self) -> String {
        match self {
            VersionError::MalformedVersionString {
                version,
                expected_format,
            } => format!("'{version}' is not a valid Informix version string (expected {expected_format})"),
        }
    }
}

pub type Result<T> = result::Result<T, VersionError>;
