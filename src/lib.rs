//! photosift - paginated photo search with per-model image classification.
//!
//! The crate is organised around observable view models and two screens
//! whose display state is derived reactively from them:
//!
//! - [`screens::PhotoGridScreen`] derives page navigation chrome from the
//!   search view model's pagination status.
//! - [`screens::ClassificationScreen`] composes the sectioned results list
//!   from the classification view model and reloads a render surface.
//!
//! The library is exposed for the demo binary and integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod reactive;
pub mod screens;
pub mod traits;
pub mod view_model;
pub mod view_state;
