//! System-level error types.
//!
//! Filesystem access, home directory lookup, and configuration parsing.

use std::path::PathBuf;
use thiserror::Error;

/// System-level error variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SystemError {
    /// File not found.
    #[error("File not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error during {operation}: {message}")]
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Home directory could not be determined.
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// A configuration value was present but unusable.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// A JSON document could not be parsed.
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl SystemError {
    /// Check if this error might be transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, SystemError::IoError { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SystemError::InvalidConfig { .. } | SystemError::InvalidJson { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory. Please check your environment configuration.".to_string()
            }
            SystemError::InvalidConfig { key, message } => {
                format!("Setting '{}' is invalid: {}", key, message)
            }
            SystemError::InvalidJson { message } => {
                format!("A file could not be read as JSON: {}", message)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
            SystemError::InvalidConfig { .. } => "E_SYS_CONFIG",
            SystemError::InvalidJson { .. } => "E_SYS_JSON",
        }
    }
}

/// Classify a std::io::Error into a SystemError.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    match (err.kind(), path) {
        (std::io::ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found_with_path() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let classified = classify_io_error(err, Some(PathBuf::from("/tmp/x.json")), "read");
        assert_eq!(
            classified,
            SystemError::FileNotFound {
                path: PathBuf::from("/tmp/x.json")
            }
        );
    }

    #[test]
    fn test_classify_not_found_without_path() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let classified = classify_io_error(err, None, "read");
        assert!(matches!(classified, SystemError::IoError { .. }));
    }

    #[test]
    fn test_configuration_errors() {
        assert!(SystemError::InvalidConfig {
            key: "PHOTOSIFT_PAGE_SIZE".to_string(),
            message: "not a number".to_string(),
        }
        .is_configuration());
        assert!(!SystemError::NoHomeDirectory.is_configuration());
    }
}
