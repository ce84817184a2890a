//! Unified error type for photosift.
//!
//! `SiftError` wraps every domain error so view models and the binary can
//! propagate with `?` and still ask the error how to present itself.

use std::fmt;

use super::category::ErrorCategory;
use super::classify::ClassifyError;
use super::context::ErrorContext;
use super::provider::ProviderError;
use super::system::SystemError;
use super::ui::UiError;

/// Unified error type.
#[derive(Debug)]
pub enum SiftError {
    /// Searching or paging failed.
    Provider(ProviderError),

    /// Running a classification model failed.
    Classify(ClassifyError),

    /// Screen controller misuse.
    Ui(UiError),

    /// Filesystem or configuration errors.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<SiftError>,
        context: ErrorContext,
    },
}

impl SiftError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiftError::Provider(err) => {
                if err.is_user_error() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::Network
                }
            }
            SiftError::Classify(ClassifyError::NoModels) => ErrorCategory::Configuration,
            SiftError::Classify(ClassifyError::UnsupportedImage { .. }) => ErrorCategory::User,
            SiftError::Classify(_) => ErrorCategory::Model,
            SiftError::Ui(_) => ErrorCategory::Client,
            SiftError::System(err) => {
                if err.is_configuration() {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::System
                }
            }
            SiftError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            SiftError::Provider(err) => err.is_retryable(),
            SiftError::Classify(err) => err.is_retryable(),
            SiftError::Ui(_) => false,
            SiftError::System(err) => err.is_transient(),
            SiftError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SiftError::Provider(err) => err.user_message(),
            SiftError::Classify(err) => err.user_message(),
            SiftError::Ui(err) => err.user_message(),
            SiftError::System(err) => err.user_message(),
            SiftError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SiftError::Provider(err) => err.error_code(),
            SiftError::Classify(err) => err.error_code(),
            SiftError::Ui(err) => err.error_code(),
            SiftError::System(err) => err.error_code(),
            SiftError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        SiftError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            SiftError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &SiftError {
        match self {
            SiftError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiftError::Provider(err) => write!(f, "{}", err),
            SiftError::Classify(err) => write!(f, "{}", err),
            SiftError::Ui(err) => write!(f, "{}", err),
            SiftError::System(err) => write!(f, "{}", err),
            SiftError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for SiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiftError::Provider(err) => Some(err),
            SiftError::Classify(err) => Some(err),
            SiftError::Ui(err) => Some(err),
            SiftError::System(err) => Some(err),
            SiftError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<ProviderError> for SiftError {
    fn from(err: ProviderError) -> Self {
        SiftError::Provider(err)
    }
}

impl From<ClassifyError> for SiftError {
    fn from(err: ClassifyError) -> Self {
        SiftError::Classify(err)
    }
}

impl From<UiError> for SiftError {
    fn from(err: UiError) -> Self {
        SiftError::Ui(err)
    }
}

impl From<SystemError> for SiftError {
    fn from(err: SystemError) -> Self {
        SiftError::System(err)
    }
}

impl From<std::io::Error> for SiftError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        SiftError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for SiftError {
    fn from(err: serde_json::Error) -> Self {
        SiftError::System(SystemError::InvalidJson {
            message: err.to_string(),
        })
    }
}
