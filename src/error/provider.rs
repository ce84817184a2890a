//! Photo provider error types.
//!
//! Failures that happen while searching for photos or paging through
//! results.

use thiserror::Error;

/// Errors raised by a [`PhotoProvider`](crate::traits::PhotoProvider) or by
/// the search view model while validating a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The query was empty after trimming.
    #[error("Search query is empty")]
    EmptyQuery,

    /// Pages are numbered from 1.
    #[error("Invalid page number: {page}")]
    InvalidPage { page: u32 },

    /// The requested page lies past the last page.
    #[error("Page {page} is out of range (last page is {page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },

    /// The provider could not be reached.
    #[error("Photo provider unavailable: {message}")]
    Unavailable { message: String },

    /// The provider answered with data that could not be understood.
    #[error("Malformed provider response: {message}")]
    Malformed { message: String },
}

impl ProviderError {
    /// Check if retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderError::Unavailable { .. })
    }

    /// Whether the user has to change their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProviderError::EmptyQuery
                | ProviderError::InvalidPage { .. }
                | ProviderError::PageOutOfRange { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::EmptyQuery => "Type something to search for.".to_string(),
            ProviderError::InvalidPage { .. } | ProviderError::PageOutOfRange { .. } => {
                "That page doesn't exist.".to_string()
            }
            ProviderError::Unavailable { .. } => {
                "Photos couldn't be loaded right now. Please try again.".to_string()
            }
            ProviderError::Malformed { .. } => {
                "The photo service sent an unexpected response.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::EmptyQuery => "E_PROV_EMPTY_QUERY",
            ProviderError::InvalidPage { .. } => "E_PROV_INVALID_PAGE",
            ProviderError::PageOutOfRange { .. } => "E_PROV_PAGE_RANGE",
            ProviderError::Unavailable { .. } => "E_PROV_UNAVAILABLE",
            ProviderError::Malformed { .. } => "E_PROV_MALFORMED",
        }
    }
}
