mod error;
mod parser;

pub use error::{Result, VersionError};
pub use parser::VersionRecord;

/// Shape reported back to the caller when a version string does not parse
pub const EXPECTED_FORMAT: &str = "<server_type> Version <major>.<minor><os><level>";

// Central structure for server version handling
pub struct Version;

impl Version {
    /// Parse a raw server version string, e.g. from `DBINFO('version', 'full')`
    pub fn parse(version: &str) -> Result<VersionRecord> {
        parser::parse(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_facade() {
        let first = Version::parse("IBM Informix Dynamic Server Version 11.50.FC6");
        let second = Version::parse("IBM Informix Dynamic Server Version 11.50.FC6");
        assert_eq!(first, second);
        assert!(Version::parse("garbage").is_err());

        let record = first.unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["server_type"], "IBM Informix Dynamic Server");
        assert_eq!(json["major"], 11);
        assert_eq!(json["service_pack_code"], "F");
    }
}
