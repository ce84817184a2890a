//! Observable view models.
//!
//! View models own the data and talk to providers and classifiers; the
//! screens only subscribe to their watch channels and call their
//! operations.

mod classification;
mod search;

pub use classification::{ClassificationViewModel, ResultFilter};
pub use search::SearchViewModel;
