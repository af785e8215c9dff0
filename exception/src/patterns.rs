use crate::category::ErrorCategory;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Informix error codes with a known meaning. Keys must stay unique.
pub const ERROR_CODES: &[(&str, ErrorCategory)] = &[
    ("-239", ErrorCategory::UniqueConstraintViolation),
    ("-268", ErrorCategory::UniqueConstraintViolation),
    ("-206", ErrorCategory::TableNotFound),
    ("-310", ErrorCategory::TableExists),
    ("-691", ErrorCategory::ForeignKeyConstraintViolation),
    ("-692", ErrorCategory::ForeignKeyConstraintViolation),
    ("-26018", ErrorCategory::ForeignKeyConstraintViolation),
    ("-391", ErrorCategory::NotNullConstraintViolation),
    ("-217", ErrorCategory::InvalidFieldName),
    ("-324", ErrorCategory::NonUniqueFieldName),
    ("-201", ErrorCategory::SyntaxError),
    ("-908", ErrorCategory::ConnectionFailure),
    ("-930", ErrorCategory::ConnectionFailure),
    ("-951", ErrorCategory::ConnectionFailure),
];

pub static ERROR_CODE_TABLE: Lazy<HashMap<&'static str, ErrorCategory>> =
    Lazy::new(|| ERROR_CODES.iter().copied().collect());

pub static CONNECT_ATTEMPT_FAILED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Attempt to connect to database server (.*) failed")
        .expect("Failed to compile connect attempt regex")
});

/// Message fragment that identifies a failed login when the driver gives no code
pub enum MessageSignature {
    Contains(&'static str),
    Pattern(&'static Lazy<Regex>),
}

impl MessageSignature {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Self::Contains(needle) => message.contains(needle),
            Self::Pattern(regex) => regex.is_match(message),
        }
    }
}

/// Checked in order; English driver messages only
pub static ACCESS_DENIED_SIGNATURES: [MessageSignature; 3] = [
    MessageSignature::Contains("Incorrect password or user"),
    MessageSignature::Contains("Cannot connect to database server"),
    MessageSignature::Pattern(&CONNECT_ATTEMPT_FAILED_PATTERN),
];
