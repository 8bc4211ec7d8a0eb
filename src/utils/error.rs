use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("Input file '{}' not found", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Input path '{}' is not a file", path.display())]
    InvalidInput { path: PathBuf },

    #[error("Failed to read '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason}")]
    ConfigValidationError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Io,
    Configuration,
}

impl HelperError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HelperError::InputNotFound { .. } | HelperError::InvalidInput { .. } => {
                ErrorCategory::Validation
            }
            HelperError::ReadInput { .. }
            | HelperError::WriteOutput { .. }
            | HelperError::Io(_) => ErrorCategory::Io,
            HelperError::ConfigError { .. } | HelperError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit status for this failure. The helper is all-or-nothing,
    /// so every failure maps to the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_path() {
        let err = HelperError::InputNotFound {
            path: PathBuf::from("missing/notes.md"),
        };
        assert_eq!(err.to_string(), "Input file 'missing/notes.md' not found");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_write_error_keeps_source_message() {
        let err = HelperError::WriteOutput {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write 'out.txt': denied");
        assert_eq!(err.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_stdout_failure_maps_to_io() {
        let err: HelperError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe").into();
        assert!(matches!(err, HelperError::Io(_)));
        assert_eq!(err.to_string(), "IO error: broken pipe");
        assert_eq!(err.exit_code(), 1);
    }
}
