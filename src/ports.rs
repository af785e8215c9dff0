use crate::error::Result;
use crate::platform::Platform;
use exception::ExceptionConverter;

pub trait Driver {
    fn database_platform(&self) -> Platform;
    fn exception_converter(&self) -> &dyn ExceptionConverter;
}

/// A driver that can pick its platform from the server version string
pub trait VersionAwarePlatformDriver: Driver {
    fn create_platform_for_version(&self, version: &str) -> Result<Platform>;
}
