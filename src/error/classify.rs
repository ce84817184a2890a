//! Classification error types.

use thiserror::Error;

/// Errors raised while running image classifiers over a photo.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// One model failed on the photo.
    #[error("Model '{model}' failed: {message}")]
    ModelFailed { model: String, message: String },

    /// Every configured model failed.
    #[error("All {count} classification models failed")]
    AllModelsFailed { count: usize },

    /// No classifiers were configured.
    #[error("No classification models configured")]
    NoModels,

    /// The classifier cannot handle this photo.
    #[error("Photo '{photo_id}' is not supported by this classifier")]
    UnsupportedImage { photo_id: String },
}

impl ClassifyError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClassifyError::ModelFailed { .. } | ClassifyError::AllModelsFailed { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ClassifyError::ModelFailed { model, .. } => {
                format!("The {} model couldn't classify this photo.", model)
            }
            ClassifyError::AllModelsFailed { .. } => {
                "None of the models could classify this photo.".to_string()
            }
            ClassifyError::NoModels => "No classification models are available.".to_string(),
            ClassifyError::UnsupportedImage { .. } => {
                "This photo can't be classified.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClassifyError::ModelFailed { .. } => "E_ML_MODEL_FAILED",
            ClassifyError::AllModelsFailed { .. } => "E_ML_ALL_FAILED",
            ClassifyError::NoModels => "E_ML_NO_MODELS",
            ClassifyError::UnsupportedImage { .. } => "E_ML_UNSUPPORTED",
        }
    }
}
