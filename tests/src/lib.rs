//! Shared fixtures for the integration tests

use exception::NativeError;

/// Version strings as returned by `DBINFO('version', 'full')` on real servers
pub const SERVER_VERSIONS: &[(&str, &str, u32, u32, &str, &str)] = &[
    ("IBM Informix Dynamic Server Version 11.50.FC6", "IBM Informix Dynamic Server", 11, 50, "F", "C6"),
    ("IBM Informix Dynamic Server Version 11.70.FC8W1", "IBM Informix Dynamic Server", 11, 70, "F", "C8W1"),
    ("IBM Informix Dynamic Server Version 12.10.UC12", "IBM Informix Dynamic Server", 12, 10, "U", "C12"),
    ("Informix Dynamic Server Version 14.10.TC5", "Informix Dynamic Server", 14, 10, "T", "C5"),
];

pub const MALFORMED_VERSIONS: &[&str] = &[
    "garbage",
    "",
    "Version 11.50.FC6",
    "IBM Informix Dynamic Server Version 11.FC6",
    "IBM Informix Dynamic Server Version 11.50.ZC6",
];

/// Messages a client produces when the login itself fails, usually without a code
pub fn access_denied_errors() -> Vec<NativeError> {
    vec![
        NativeError::without_code(
            "SQLSTATE[28000]: Incorrect password or user informix@db01 is not known on the database server.",
        ),
        NativeError::new("999999", "Cannot connect to database server foo"),
        NativeError::new(
            "-1",
            "SQLSTATE[HY000]: Attempt to connect to database server (ol_informix1410) failed.",
        ),
    ]
}

pub fn unclassified_errors() -> Vec<NativeError> {
    vec![
        NativeError::new("999999", "something else"),
        NativeError::new("-100", "ISAM error: duplicate value for a record with unique key."),
        NativeError::without_code(""),
        NativeError::new("", "connection reset by peer"),
    ]
}
