use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Version error: {0}")]
    Version(#[from] version::VersionError),

    #[error("Driver error: {0}")]
    Dbal(#[from] informix_dbal::DbalError),

    #[error("Failed to render JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Version(err) => err.user_message(),
            Self::Dbal(err) => err.user_message(),
            Self::JsonError(err) => format!("Failed to render JSON: {err}"),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

pub trait ResultExt<T, E> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: Into<CliError>,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| {
            let cli_err: CliError = err.into();
            cli_err.with_context(context())
        })
    }
}
