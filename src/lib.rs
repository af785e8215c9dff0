//! IBM Informix driver adapter.
//!
//! Wires the error classifier from the `exception` crate and the server
//! version parser from the `version` crate into a single driver facade.

pub mod config;
pub mod driver;
pub mod error;
pub mod platform;
pub mod ports;

pub use config::DriverConfig;
pub use driver::InformixDriver;
pub use error::{DbalError, Result};
pub use platform::Platform;
pub use ports::{Driver, VersionAwarePlatformDriver};

pub use exception::{DriverException, ErrorCategory, ExceptionConverter, NativeError, Query};
pub use version::{VersionError, VersionRecord};
