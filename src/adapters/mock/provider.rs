//! Mock photo provider for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ProviderError;
use crate::models::{Photo, SearchPage};
use crate::traits::PhotoProvider;

/// A recorded search for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSearch {
    pub query: String,
    pub page: u32,
}

/// Scripted in-memory photo provider.
///
/// Queries match case-insensitively against the keys photos were added
/// under. Clones share state, so a test can keep a handle after giving one
/// to a view model.
///
/// ```ignore
/// let provider = MockPhotoProvider::with_photos("cats", 25, 10);
/// let page = provider.search("cats", 3).await?;
/// assert_eq!(page.photos.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MockPhotoProvider {
    photos: Arc<Mutex<HashMap<String, Vec<Photo>>>>,
    page_size: u32,
    requests: Arc<Mutex<Vec<RecordedSearch>>>,
    next_error: Arc<Mutex<Option<ProviderError>>>,
}

impl MockPhotoProvider {
    pub fn new(page_size: u32) -> Self {
        Self {
            photos: Arc::new(Mutex::new(HashMap::new())),
            page_size,
            requests: Arc::new(Mutex::new(Vec::new())),
            next_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Provider holding `count` generated photos for `query`.
    pub fn with_photos(query: &str, count: usize, page_size: u32) -> Self {
        let provider = Self::new(page_size);
        let photos = (0..count)
            .map(|i| Photo::new(format!("{}-{}", query, i), vec![(i % 256) as u8; 8], query))
            .collect();
        provider.add_photos(query, photos);
        provider
    }

    pub fn add_photos(&self, query: &str, photos: Vec<Photo>) {
        self.photos
            .lock()
            .unwrap()
            .entry(query.to_lowercase())
            .or_default()
            .extend(photos);
    }

    /// Make the next search fail with `err`.
    pub fn fail_next(&self, err: ProviderError) {
        *self.next_error.lock().unwrap() = Some(err);
    }

    pub fn requests(&self) -> Vec<RecordedSearch> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoProvider for MockPhotoProvider {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, ProviderError> {
        self.requests.lock().unwrap().push(RecordedSearch {
            query: query.to_string(),
            page,
        });

        if let Some(err) = self.next_error.lock().unwrap().take() {
            return Err(err);
        }

        let photos = self.photos.lock().unwrap();
        let matches = photos
            .get(&query.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        SearchPage::paginate(matches, page, self.page_size)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_records_and_paginates() {
        let provider = MockPhotoProvider::with_photos("cats", 12, 5);
        let page = provider.search("CATS", 3).await.unwrap();

        assert_eq!(page.photos.len(), 2);
        assert_eq!(page.page_count, 3);
        assert_eq!(
            provider.requests(),
            vec![RecordedSearch {
                query: "CATS".to_string(),
                page: 3
            }]
        );
    }

    #[tokio::test]
    async fn test_fail_next_only_once() {
        let provider = MockPhotoProvider::with_photos("cats", 3, 5);
        provider.fail_next(ProviderError::Unavailable {
            message: "down".to_string(),
        });

        assert!(provider.search("cats", 1).await.is_err());
        assert!(provider.search("cats", 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_query_returns_empty_page() {
        let provider = MockPhotoProvider::with_photos("cats", 3, 5);
        let page = provider.search("dogs", 1).await.unwrap();
        assert!(page.photos.is_empty());
        assert_eq!(page.page_count, 1);
    }
}
