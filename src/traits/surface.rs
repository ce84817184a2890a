//! Rendering and navigation seams used by the screens.

use crate::models::Photo;
use crate::view_state::Section;

/// Something that can draw a full section list.
///
/// Every call is a complete replacement of what was shown before; there is
/// no incremental update contract.
pub trait RenderSurface: Send + Sync {
    /// Redraw everything from `sections`.
    fn reload(&self, sections: &[Section], animated: bool);
}

/// Pushes the classification screen for a selected photo.
pub trait Navigator: Send + Sync {
    fn show_classification(&self, photo: Photo);
}
