//! View state derivations.
//!
//! Everything here is a pure function of its inputs: data in, display state
//! out. The screens feed these functions from view-model observables and
//! hand the results to a renderer.
//!
//! ```text
//!  photo ─────────────┐
//!  model results ─────┼─► compose() ──► [Section; 2] ──► RenderSurface
//!  filtered batches ──┘
//!
//!  pagination status ─┬─► PageNav::derive() ──► NavState ──► grid chrome
//!  search active ─────┘
//! ```
//!
//! ## Components
//!
//! - [`compose`]: the two-section results list ([`Row`], [`Section`])
//! - [`PageNav`]: next/previous/indicator/title for the photo grid
//! - [`PageIndicator`]: the indicator's visible state, which only the
//!   cancel action hides

mod page_nav;
mod row_composer;
mod rows;

pub use page_nav::{NavState, PageIndicator, PageNav};
pub use row_composer::{compose, SectionList, IMAGE_SECTION, RESULTS_SECTION};
pub use rows::{Row, Section, SectionFooter};
