//! Search pagination state.

use super::photo::Photo;
use crate::error::ProviderError;

/// Where the user is in a paginated search.
///
/// A query either exists with a known page and page count, or nothing has
/// been searched yet. There is no state with a page but no query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaginationStatus {
    /// No search has completed yet.
    #[default]
    NoQuery,
    /// A search has completed; `page` is 1-based.
    Active {
        page: u32,
        page_count: u32,
        query: String,
    },
}

impl PaginationStatus {
    pub fn active(page: u32, page_count: u32, query: impl Into<String>) -> Self {
        PaginationStatus::Active {
            page,
            page_count,
            query: query.into(),
        }
    }

    /// Collapse three independently optional fields into a status.
    ///
    /// All three must be present for the result to be `Active`.
    pub fn from_parts(page: Option<u32>, page_count: Option<u32>, query: Option<String>) -> Self {
        match (page, page_count, query) {
            (Some(page), Some(page_count), Some(query)) => PaginationStatus::Active {
                page,
                page_count,
                query,
            },
            _ => PaginationStatus::NoQuery,
        }
    }

    pub fn has_query(&self) -> bool {
        matches!(self, PaginationStatus::Active { .. })
    }

    pub fn page(&self) -> Option<u32> {
        match self {
            PaginationStatus::Active { page, .. } => Some(*page),
            PaginationStatus::NoQuery => None,
        }
    }

    pub fn page_count(&self) -> Option<u32> {
        match self {
            PaginationStatus::Active { page_count, .. } => Some(*page_count),
            PaginationStatus::NoQuery => None,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            PaginationStatus::Active { query, .. } => Some(query),
            PaginationStatus::NoQuery => None,
        }
    }
}

/// One page of search results from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub photos: Vec<Photo>,
    /// 1-based page number of this page
    pub page: u32,
    pub page_count: u32,
    /// Number of matches across all pages
    pub total_results: u64,
}

impl SearchPage {
    /// Cut one page out of the full list of matches.
    ///
    /// There is always at least one page, even with no matches.
    pub fn paginate(matches: &[Photo], page: u32, page_size: u32) -> Result<Self, ProviderError> {
        if page == 0 {
            return Err(ProviderError::InvalidPage { page });
        }
        let page_size = page_size.max(1) as usize;
        let page_count = matches.len().div_ceil(page_size).max(1);
        let page_count = u32::try_from(page_count).unwrap_or(u32::MAX);
        if page > page_count {
            return Err(ProviderError::PageOutOfRange { page, page_count });
        }

        let start = (page as usize - 1) * page_size;
        let end = (start + page_size).min(matches.len());
        Ok(Self {
            photos: matches[start..end].to_vec(),
            page,
            page_count,
            total_results: matches.len() as u64,
        })
    }
}
