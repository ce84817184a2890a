//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockPhotoProvider`] - Scripted paginated search with failure injection
//! - [`MockClassifier`] - Canned or failing classification model
//! - [`RecordingSurface`] - Records every full reload
//! - [`RecordingNavigator`] - Records pushed photos

pub mod classifier;
pub mod provider;
pub mod surface;

pub use classifier::MockClassifier;
pub use provider::{MockPhotoProvider, RecordedSearch};
pub use surface::{RecordedReload, RecordingNavigator, RecordingSurface};
