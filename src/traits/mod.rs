//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`PhotoProvider`] - Paginated photo search
//! - [`ImageClassifier`] - One classification model
//! - [`RenderSurface`] - Full-reload list renderer
//! - [`Navigator`] - Screen transitions

pub mod classifier;
pub mod provider;
pub mod surface;

pub use classifier::ImageClassifier;
pub use provider::PhotoProvider;
pub use surface::{Navigator, RenderSurface};
