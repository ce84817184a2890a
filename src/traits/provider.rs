//! Photo provider trait abstraction.
//!
//! The search view model talks to whatever backs the photo search through
//! this trait, so tests can swap in a scripted provider.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::SearchPage;

/// Trait for paginated photo search.
///
/// # Example
///
/// ```ignore
/// use photosift::traits::PhotoProvider;
///
/// async fn first_page<P: PhotoProvider>(provider: &P) -> Result<usize, ProviderError> {
///     let page = provider.search("cats", 1).await?;
///     Ok(page.photos.len())
/// }
/// ```
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Search for photos matching `query`.
    ///
    /// # Arguments
    /// * `query` - Trimmed, non-empty search text
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// The requested page, or `PageOutOfRange` when `page` exceeds the
    /// provider's page count
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, ProviderError>;

    /// Short name for logging.
    fn name(&self) -> &str {
        "provider"
    }
}
