use serde::Serialize;
use std::fmt;

/// SQL dialect and behaviour variant selected for a connection.
///
/// Every Informix server version currently maps to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Informix,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Informix => "informix",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
