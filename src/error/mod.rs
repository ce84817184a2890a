//! Unified error handling for photosift.
//!
//! - **Error Categories**: classification for retry and messaging decisions
//! - **Domain-specific Errors**: provider, classification, UI and system errors
//! - **Unified Error Type**: `SiftError` consolidates all error types
//! - **Error Context**: operation, query and photo attached to failures
//! - **Result Type Alias**: `SiftResult<T>`
//!
//! The row composition and page navigation derivations never fail; errors
//! only come from the collaborators around them.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Provider unreachable or malformed | Yes |
//! | Model | A classifier failed | Yes |
//! | Client | Programming errors | No |
//! | User | Empty query, bad page | No |
//! | System | OS/filesystem errors | Sometimes |
//! | Configuration | Config issues | No |

mod category;
mod classify;
mod context;
mod provider;
mod result;
mod sift_error;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use classify::ClassifyError;
pub use context::ErrorContext;
pub use provider::ProviderError;
pub use result::{ResultExt, SiftResult};
pub use sift_error::SiftError;
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;
