use serde::Serialize;
use std::fmt;

/// Normalized kind of a driver failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    UniqueConstraintViolation,
    TableNotFound,
    TableExists,
    ForeignKeyConstraintViolation,
    NotNullConstraintViolation,
    InvalidFieldName,
    NonUniqueFieldName,
    SyntaxError,
    ConnectionFailure,
    /// Nothing more specific could be determined
    Generic,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 10] = [
        Self::UniqueConstraintViolation,
        Self::TableNotFound,
        Self::TableExists,
        Self::ForeignKeyConstraintViolation,
        Self::NotNullConstraintViolation,
        Self::InvalidFieldName,
        Self::NonUniqueFieldName,
        Self::SyntaxError,
        Self::ConnectionFailure,
        Self::Generic,
    ];

    /// Stable snake_case name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UniqueConstraintViolation => "unique_constraint_violation",
            Self::TableNotFound => "table_not_found",
            Self::TableExists => "table_exists",
            Self::ForeignKeyConstraintViolation => "foreign_key_constraint_violation",
            Self::NotNullConstraintViolation => "not_null_constraint_violation",
            Self::InvalidFieldName => "invalid_field_name",
            Self::NonUniqueFieldName => "non_unique_field_name",
            Self::SyntaxError => "syntax_error",
            Self::ConnectionFailure => "connection_failure",
            Self::Generic => "generic",
        }
    }

    /// Unique, foreign key and not-null violations share a common parent kind
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::UniqueConstraintViolation
                | Self::ForeignKeyConstraintViolation
                | Self::NotNullConstraintViolation
        )
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde() {
        for category in ErrorCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_constraint_violation_family() {
        let constraints: Vec<_> = ErrorCategory::ALL
            .iter()
            .filter(|c| c.is_constraint_violation())
            .collect();

        assert_eq!(constraints.len(), 3);
        assert!(!ErrorCategory::TableExists.is_constraint_violation());
        assert!(!ErrorCategory::Generic.is_constraint_violation());
    }
}
