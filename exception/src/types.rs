use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Raw failure as reported by the database client, before normalization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NativeError {
    /// Driver-defined error token, e.g. `-239`
    pub code: String,
    pub message: String,
}

impl NativeError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Failure that carries a message but no driver error code
    pub fn without_code(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }
}

/// Statement that was running when the failure happened.
///
/// Only attached to the normalized error for diagnostics; classification never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub sql: String,
    pub params: Vec<String>,
}

impl Query {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)?;
        if !self.params.is_empty() {
            write!(f, " with params [{}]", self.params.join(", "))?;
        }
        Ok(())
    }
}
