//! Paginated photo grid screen.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

use crate::error::{SiftResult, UiError};
use crate::models::Photo;
use crate::reactive::{combine_latest2, Subscription};
use crate::traits::Navigator;
use crate::view_model::SearchViewModel;
use crate::view_state::{NavState, PageIndicator, PageNav};

const SCREEN: &str = "photo_grid";

/// Snapshot of everything the grid draws.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewState {
    pub photos: Vec<Photo>,
    pub nav: NavState,
    pub page_indicator_visible: bool,
    pub total_results: u64,
}

struct Binding {
    nav: watch::Receiver<NavState>,
    _subscription: Subscription,
}

/// Binds a [`SearchViewModel`] to grid chrome and selection.
///
/// The navigation state is derived from the view model's pagination status
/// and this screen's search-bar flag while the screen is visible.
pub struct PhotoGridScreen {
    view_model: Arc<SearchViewModel>,
    navigator: Arc<dyn Navigator>,
    page_nav: PageNav,
    search_active: watch::Sender<bool>,
    indicator: Arc<Mutex<PageIndicator>>,
    binding: Option<Binding>,
}

impl PhotoGridScreen {
    pub fn new(view_model: Arc<SearchViewModel>, navigator: Arc<dyn Navigator>) -> Self {
        let fallback_title = view_model.navigation_title().borrow().clone();
        Self {
            view_model,
            navigator,
            page_nav: PageNav::new(fallback_title),
            search_active: watch::Sender::new(false),
            indicator: Arc::new(Mutex::new(PageIndicator::new())),
            binding: None,
        }
    }

    /// Start deriving navigation state. Must run inside a tokio runtime.
    pub fn appear(&mut self) {
        if self.binding.is_some() {
            return;
        }

        let page_nav = self.page_nav.clone();
        let indicator = self.indicator.clone();
        let (nav, subscription) = combine_latest2(
            self.view_model.query_status(),
            self.search_active.subscribe(),
            move |status, active| {
                let nav = page_nav.derive(status, *active);
                indicator
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .apply(&nav);
                tracing::debug!(title = %nav.title_text, next = nav.show_next_page, prev = nav.show_prev_page, "grid navigation updated");
                nav
            },
        );

        self.binding = Some(Binding {
            nav,
            _subscription: subscription,
        });
    }

    /// Stop deriving; pending updates are dropped.
    pub fn disappear(&mut self) {
        self.binding = None;
    }

    pub fn is_visible(&self) -> bool {
        self.binding.is_some()
    }

    pub fn set_search_active(&self, active: bool) {
        self.search_active.send_replace(active);
    }

    /// The cancel button: deactivates search and hides the page indicator.
    pub fn cancel_search(&self) {
        self.search_active.send_replace(false);
        self.lock_indicator().dismiss();
    }

    pub async fn submit_search(&self, query: &str) -> SiftResult<()> {
        self.view_model.search_for(query, 1).await
    }

    pub async fn next_page(&self) -> SiftResult<bool> {
        self.view_model.on_next_page().await
    }

    pub async fn previous_page(&self) -> SiftResult<bool> {
        self.view_model.on_last_page().await
    }

    /// Wait until the derived navigation state changes.
    pub async fn changed(&mut self) -> SiftResult<()> {
        let binding = self.binding.as_mut().ok_or_else(not_visible)?;
        if binding.nav.changed().await.is_err() {
            return Err(not_visible().into());
        }
        Ok(())
    }

    /// Give the navigation state up to `within` to change, then snapshot it.
    ///
    /// Navigation that stays quiet is not an error; the current state is
    /// returned.
    pub async fn settled(&mut self, within: Duration) -> SiftResult<GridViewState> {
        match tokio::time::timeout(within, self.changed()).await {
            Ok(changed) => changed?,
            Err(_) => tracing::debug!(?within, "navigation unchanged, using current state"),
        }
        self.sync()
    }

    /// Current view state.
    pub fn sync(&mut self) -> SiftResult<GridViewState> {
        let binding = self.binding.as_mut().ok_or_else(not_visible)?;
        let nav = binding.nav.borrow_and_update().clone();

        Ok(GridViewState {
            photos: self.view_model.photos().borrow().clone(),
            nav,
            page_indicator_visible: self.lock_indicator().is_visible(),
            total_results: *self.view_model.total_results().borrow(),
        })
    }

    /// Open the classification screen for the photo at `index`.
    pub fn select(&self, index: usize) -> SiftResult<()> {
        let photo = self.view_model.photo(index).ok_or(UiError::IndexOutOfRange {
            index,
            len: self.view_model.photo_count(),
        })?;
        tracing::info!(photo_id = %photo.id, index, "photo selected");
        self.navigator.show_classification(photo);
        Ok(())
    }

    fn lock_indicator(&self) -> std::sync::MutexGuard<'_, PageIndicator> {
        self.indicator.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_visible() -> UiError {
    UiError::NotVisible {
        screen: SCREEN.to_string(),
    }
}
