//! Maps Informix driver failures onto [`ErrorCategory`].
//!
//! Pure and stateless: the lookup table and message patterns are built once
//! and shared, so converters can be used from any thread.

use crate::category::ErrorCategory;
use crate::error::DriverException;
use crate::patterns::{ACCESS_DENIED_SIGNATURES, ERROR_CODE_TABLE};
use crate::types::{NativeError, Query};

/// Turns a raw driver failure into a normalized one
pub trait ExceptionConverter: Send + Sync {
    /// Never fails; anything unrecognized becomes [`ErrorCategory::Generic`]
    fn convert(&self, error: NativeError, query: Option<Query>) -> DriverException;
}

/// Converter for the IBM Informix error codes
#[derive(Debug, Clone, Copy, Default)]
pub struct InformixExceptionConverter;

impl InformixExceptionConverter {
    pub fn new() -> Self {
        Self
    }
}

impl ExceptionConverter for InformixExceptionConverter {
    fn convert(&self, error: NativeError, query: Option<Query>) -> DriverException {
        classify(error, query)
    }
}

pub fn classify(error: NativeError, query: Option<Query>) -> DriverException {
    let category = categorize(&error.code, &error.message);
    DriverException::new(category, error, query)
}

/// Resolve the category for a code/message pair without wrapping anything
pub fn categorize(code: &str, message: &str) -> ErrorCategory {
    if let Some(category) = classify_code(code) {
        return category;
    }

    // Some failures arrive without the driver-specific code
    if is_access_denied_message(message) {
        return ErrorCategory::ConnectionFailure;
    }

    ErrorCategory::Generic
}

pub fn classify_code(code: &str) -> Option<ErrorCategory> {
    ERROR_CODE_TABLE.get(code).copied()
}

pub fn is_access_denied_message(message: &str) -> bool {
    ACCESS_DENIED_SIGNATURES
        .iter()
        .any(|signature| signature.matches(message))
}
