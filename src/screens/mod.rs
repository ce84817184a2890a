//! Screen controllers.
//!
//! A screen binds view-model observables to view state on `appear()` and
//! drops the binding on `disappear()`. Everything it shows is derived; the
//! only state a screen owns is UI input (the search-bar flag) and the page
//! indicator.

mod classification;
mod photo_grid;

pub use classification::ClassificationScreen;
pub use photo_grid::{GridViewState, PhotoGridScreen};
