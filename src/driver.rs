use crate::config::DriverConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::ports::{Driver, VersionAwarePlatformDriver};
use exception::{DriverException, ExceptionConverter, InformixExceptionConverter, NativeError, Query};
use tracing::debug;
use version::{Version, VersionRecord};

/// Driver adapter for IBM Informix servers
#[derive(Debug, Clone, Default)]
pub struct InformixDriver {
    converter: InformixExceptionConverter,
}

impl InformixDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a failure caught from the database client
    pub fn convert_exception(&self, error: NativeError, query: Option<Query>) -> DriverException {
        let converted = self.exception_converter().convert(error, query);
        debug!(
            code = %converted.code(),
            category = %converted.category(),
            "converted driver exception"
        );
        converted
    }

    /// Parse and validate a server version string
    pub fn server_version(&self, version: &str) -> Result<VersionRecord> {
        Ok(Version::parse(version)?)
    }

    /// Platform for a connection, honouring a configured server version
    pub fn platform_for(&self, config: &DriverConfig) -> Result<Platform> {
        match &config.server_version {
            Some(version) => self.create_platform_for_version(version),
            None => Ok(self.database_platform()),
        }
    }
}

impl Driver for InformixDriver {
    fn database_platform(&self) -> Platform {
        Platform::Informix
    }

    fn exception_converter(&self) -> &dyn ExceptionConverter {
        &self.converter
    }
}

impl VersionAwarePlatformDriver for InformixDriver {
    fn create_platform_for_version(&self, version: &str) -> Result<Platform> {
        let record = self.server_version(version)?;
        debug!(
            server_type = %record.server_type,
            major = record.major,
            minor = record.minor,
            "selected platform for server version"
        );

        Ok(self.database_platform())
    }
}
