//! Search view model backing the photo grid.

use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use crate::error::{ErrorContext, ProviderError, ResultExt, SiftResult};
use crate::models::{PaginationStatus, Photo};
use crate::traits::PhotoProvider;

/// Observable search state plus the operations that change it.
///
/// Every property is published through a watch channel; callers subscribe
/// with the accessor of the same name. Failed searches leave the
/// previously published state untouched.
pub struct SearchViewModel {
    provider: Arc<dyn PhotoProvider>,
    photos: watch::Sender<Vec<Photo>>,
    query_status: watch::Sender<PaginationStatus>,
    last_query: watch::Sender<Option<String>>,
    navigation_title: watch::Sender<String>,
    total_results: watch::Sender<u64>,
    /// Serializes searches so pages from two requests never interleave
    in_flight: Mutex<()>,
}

impl SearchViewModel {
    pub fn new(provider: Arc<dyn PhotoProvider>, navigation_title: impl Into<String>) -> Self {
        Self {
            provider,
            photos: watch::Sender::new(Vec::new()),
            query_status: watch::Sender::new(PaginationStatus::NoQuery),
            last_query: watch::Sender::new(None),
            navigation_title: watch::Sender::new(navigation_title.into()),
            total_results: watch::Sender::new(0),
            in_flight: Mutex::new(()),
        }
    }

    pub fn photos(&self) -> watch::Receiver<Vec<Photo>> {
        self.photos.subscribe()
    }

    pub fn query_status(&self) -> watch::Receiver<PaginationStatus> {
        self.query_status.subscribe()
    }

    pub fn last_query(&self) -> watch::Receiver<Option<String>> {
        self.last_query.subscribe()
    }

    /// Title shown while no search has completed.
    pub fn navigation_title(&self) -> watch::Receiver<String> {
        self.navigation_title.subscribe()
    }

    pub fn total_results(&self) -> watch::Receiver<u64> {
        self.total_results.subscribe()
    }

    pub fn current_status(&self) -> PaginationStatus {
        self.query_status.borrow().clone()
    }

    pub fn photo(&self, index: usize) -> Option<Photo> {
        self.photos.borrow().get(index).cloned()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.borrow().len()
    }

    /// Search for `query` and publish the requested page.
    pub async fn search_for(&self, query: &str, page: u32) -> SiftResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProviderError::EmptyQuery.into());
        }
        if page == 0 {
            return Err(ProviderError::InvalidPage { page }.into());
        }

        let _guard = self.in_flight.lock().await;
        tracing::info!(query, page, provider = self.provider.name(), "searching photos");

        let result = self.provider.search(query, page).await.with_context(|| {
            ErrorContext::new("search_for")
                .with_query(query)
                .with_component("search_view_model")
        });
        let result = match result {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, code = err.error_code(), "photo search failed");
                return Err(err);
            }
        };

        tracing::debug!(
            query,
            page = result.page,
            page_count = result.page_count,
            photos = result.photos.len(),
            "search page loaded"
        );

        self.photos.send_replace(result.photos);
        self.total_results.send_replace(result.total_results);
        self.last_query.send_replace(Some(query.to_string()));
        self.query_status.send_replace(PaginationStatus::active(
            result.page,
            result.page_count,
            query,
        ));
        Ok(())
    }

    /// Load the next page of the current query.
    ///
    /// Returns `Ok(false)` without searching when there is no query or the
    /// current page is the last one.
    pub async fn on_next_page(&self) -> SiftResult<bool> {
        let PaginationStatus::Active {
            page,
            page_count,
            query,
        } = self.current_status()
        else {
            tracing::debug!("next page requested without a query");
            return Ok(false);
        };

        let next = page.saturating_add(1);
        if next > page_count {
            tracing::debug!(page, page_count, "already on the last page");
            return Ok(false);
        }

        self.search_for(&query, next).await?;
        Ok(true)
    }

    /// Load the previous page of the current query.
    pub async fn on_last_page(&self) -> SiftResult<bool> {
        let PaginationStatus::Active { page, query, .. } = self.current_status() else {
            tracing::debug!("previous page requested without a query");
            return Ok(false);
        };

        if page <= 1 {
            tracing::debug!(page, "already on the first page");
            return Ok(false);
        }

        self.search_for(&query, page - 1).await?;
        Ok(true)
    }
}
