//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`CatalogProvider`] / [`CatalogClassifier`] - JSON photo catalog
//! - [`ConsoleSurface`] - Text renderer for the demo binary
//! - [`ChannelNavigator`] - Forwards selected photos over a channel
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockPhotoProvider`] - Scripted search results
//! - [`mock::MockClassifier`] - Canned classifications
//! - [`mock::RecordingSurface`] / [`mock::RecordingNavigator`] - Call recorders

pub mod catalog;
pub mod console;
pub mod mock;

pub use catalog::{Catalog, CatalogClassifier, CatalogProvider};
pub use console::{render_sections, ChannelNavigator, ConsoleSurface};
pub use mock::{MockClassifier, MockPhotoProvider, RecordingNavigator, RecordingSurface};
