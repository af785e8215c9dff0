use crate::error::{Result, VersionError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;

/// See <http://www-01.ibm.com/support/knowledgecenter/SSGU8G_11.50.0/com.ibm.sqls.doc/ids_sqs_1491.htm>
///
/// Whitespace, digits and the case-insensitive `Version` keyword are ASCII only.
static SERVER_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<server_type>.*)(?i-u:\s+Version\s+)(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<so>F|H|T|U)(?P<level>[[:alnum:]]+)$",
    )
    .expect("Failed to compile server version regex")
});

/// Fields of an Informix server version string such as
/// `IBM Informix Dynamic Server Version 11.50.FC6`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionRecord {
    pub server_type: String,
    pub major: u32,
    pub minor: u32,
    /// One of `F`, `H`, `T` or `U`
    pub service_pack_code: String,
    pub level: String,
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Version {}.{}.{}{}",
            self.server_type, self.major, self.minor, self.service_pack_code, self.level
        )
    }
}

pub fn parse(raw: &str) -> Result<VersionRecord> {
    let captures = SERVER_VERSION_PATTERN
        .captures(raw)
        .ok_or_else(|| VersionError::malformed(raw))?;

    Ok(VersionRecord {
        server_type: group(&captures, "server_type").to_string(),
        major: number(&captures, "major", raw)?,
        minor: number(&captures, "minor", raw)?,
        service_pack_code: group(&captures, "so").to_string(),
        level: group(&captures, "level").to_string(),
    })
}

fn group<'h>(captures: &Captures<'h>, name: &str) -> &'h str {
    captures.name(name).map_or("", |m| m.as_str())
}

// Digits that overflow u32 are treated like any other malformed input
fn number(captures: &Captures<'_>, name: &str, raw: &str) -> Result<u32> {
    group(captures, name)
        .parse()
        .map_err(|_| VersionError::malformed(raw))
}
