//! Page navigation state for the photo grid.
//!
//! Derives next/previous button visibility, page indicator visibility and
//! the navigation title from the search's pagination status and whether
//! the search bar is active.

use crate::format::format_page_title;
use crate::models::PaginationStatus;

/// Derived navigation UI state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    pub show_next_page: bool,
    pub show_prev_page: bool,
    /// Mirrors the search bar's active flag; see [`PageIndicator`] for how
    /// it is applied
    pub show_page_indicator: bool,
    pub title_text: String,
}

/// Computes [`NavState`] from its two inputs.
#[derive(Debug, Clone)]
pub struct PageNav {
    fallback_title: String,
}

impl PageNav {
    /// `fallback_title` is shown until a search has completed.
    pub fn new(fallback_title: impl Into<String>) -> Self {
        Self {
            fallback_title: fallback_title.into(),
        }
    }

    pub fn fallback_title(&self) -> &str {
        &self.fallback_title
    }

    pub fn derive(&self, status: &PaginationStatus, search_active: bool) -> NavState {
        match status {
            PaginationStatus::NoQuery => NavState {
                show_next_page: false,
                show_prev_page: false,
                show_page_indicator: search_active,
                title_text: self.fallback_title.clone(),
            },
            PaginationStatus::Active {
                page, page_count, ..
            } => {
                let current = i64::from(*page);
                NavState {
                    show_next_page: current + 1 <= i64::from(*page_count),
                    show_prev_page: current - 1 > 0,
                    show_page_indicator: search_active,
                    title_text: format_page_title(*page, *page_count),
                }
            }
        }
    }
}

/// Visible state of the page indicator.
///
/// The indicator is switched on whenever a derived state asks for it, but
/// a derived state with `show_page_indicator == false` leaves it alone.
/// Only [`PageIndicator::dismiss`], driven by the explicit cancel action,
/// hides it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageIndicator {
    visible: bool,
}

impl PageIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, nav: &NavState) {
        if nav.show_page_indicator {
            self.visible = true;
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
