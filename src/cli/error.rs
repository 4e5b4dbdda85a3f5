//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    App(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::App(ApplicationError::Domain(e))
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::App(e) => match e {
                ApplicationError::Io { source, .. }
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    crate::exitcode::NOINPUT
                }
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(d) => match d {
                    DomainError::InvalidTopN(_) | DomainError::InvalidNgramOrder(_) => {
                        crate::exitcode::USAGE
                    }
                    DomainError::InvalidOutline { .. }
                    | DomainError::EmptyOutline
                    | DomainError::RootExists => crate::exitcode::DATAERR,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_invalid_top_n_when_mapping_then_usage_exit_code() {
        let err: CliError = DomainError::InvalidTopN(0).into();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_bad_outline_when_mapping_then_dataerr_exit_code() {
        let err: CliError = DomainError::EmptyOutline.into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_missing_file_when_mapping_then_noinput_exit_code() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CliError::App(ApplicationError::io("missing.txt", io));
        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }
}
