use crate::category::ErrorCategory;
use crate::types::{NativeError, Query};
use std::fmt;
use thiserror::Error;

/// A driver failure after it has been sorted into an [`ErrorCategory`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct DriverException {
    category: ErrorCategory,
    #[source]
    original: NativeError,
    query: Option<Query>,
}

impl DriverException {
    pub fn new(category: ErrorCategory, original: NativeError, query: Option<Query>) -> Self {
        Self {
            category,
            original,
            query,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn original(&self) -> &NativeError {
        &self.original
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Driver error code of the wrapped failure
    pub fn code(&self) -> &str {
        &self.original.code
    }

    pub fn into_parts(self) -> (ErrorCategory, NativeError, Option<Query>) {
        (self.category, self.original, self.query)
    }
}

impl fmt::Display for DriverException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.query {
            Some(_) => write!(
                f,
                "An exception occurred while executing a query: {}",
                self.original.message
            ),
            None => write!(f, "An exception occurred in the driver: {}", self.original.message),
        }
    }
}
