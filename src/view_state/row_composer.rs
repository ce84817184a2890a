//! Builds the sectioned row list for the classification results screen.
//!
//! The list always has two sections:
//!
//! ```text
//! section 0  [ImageCell]                         footer: ImageCellFooter
//! section 1  [MLSectionCell (model A)]           footer: Footer
//!            [MLClassifiResultCell] ...  (A's batches, in order)
//!            [MLSectionCell (model B)]
//!            [MLClassifiResultCell] ...  (B's batches, in order)
//! ```
//!
//! Batches whose model type is not among the displayed model results are
//! dropped.

use crate::models::{ClassificationBatch, ClassificationModelResult, Photo};

use super::rows::{Row, Section, SectionFooter};

/// Index of the photo section.
pub const IMAGE_SECTION: usize = 0;
/// Index of the grouped results section.
pub const RESULTS_SECTION: usize = 1;

/// The composed list. Always exactly two sections.
pub type SectionList = [Section; 2];

/// Compose the full row list from the latest inputs.
///
/// `model_results` sets the display order. Each model's row is followed by
/// the entries of every batch in `classifications` tagged with the same
/// model type, in batch order.
pub fn compose(
    photo: &Photo,
    model_results: &[ClassificationModelResult],
    classifications: &[ClassificationBatch],
) -> SectionList {
    let image = Section::new(
        vec![Row::Image(photo.clone())],
        Some(SectionFooter::ImagePrompt),
    );

    let mut rows = Vec::with_capacity(model_results.len() + entry_count(classifications));
    for model in model_results {
        rows.push(Row::ModelSection(model.clone()));
        rows.extend(
            classifications
                .iter()
                .filter(|batch| batch.model_type == model.model_type)
                .flat_map(|batch| batch.entries.iter().cloned())
                .map(Row::ClassificationResult),
        );
    }

    tracing::trace!(
        photo_id = %photo.id,
        models = model_results.len(),
        rows = rows.len(),
        "composed classification rows"
    );

    [image, Section::new(rows, Some(SectionFooter::Spacer))]
}

fn entry_count(batches: &[ClassificationBatch]) -> usize {
    batches.iter().map(|batch| batch.entries.len()).sum()
}
