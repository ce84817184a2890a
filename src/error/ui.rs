//! Screen-level error types.

use thiserror::Error;

/// Errors raised by screen controllers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// A grid or list index past the end of the data.
    #[error("Index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The screen was driven before `appear()` bound it.
    #[error("Screen '{screen}' is not visible")]
    NotVisible { screen: String },
}

impl UiError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            UiError::IndexOutOfRange { .. } => "E_UI_INDEX",
            UiError::NotVisible { .. } => "E_UI_NOT_VISIBLE",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            UiError::IndexOutOfRange { .. } => "That item is no longer available.".to_string(),
            UiError::NotVisible { screen } => format!("The {} screen is not open.", screen),
        }
    }
}
