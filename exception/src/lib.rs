//! Informix error classification
//!
//! Translates the `(code, message)` pair reported by an Informix client into a
//! [`DriverException`] tagged with a normalized [`ErrorCategory`].

mod category;
mod converter;
mod error;
mod patterns;
mod types;

pub use category::ErrorCategory;
pub use converter::{
    ExceptionConverter, InformixExceptionConverter, categorize, classify, classify_code,
    is_access_denied_message,
};
pub use error::DriverException;
pub use patterns::ERROR_CODES;
pub use types::{NativeError, Query};
