//! Display-agnostic rows and sections for the classification results list.

use crate::models::{ClassificationEntry, ClassificationModelResult, Photo};

/// One row of the results list.
///
/// Rows carry their payload by value and have no identity of their own;
/// the whole list is rebuilt whenever an input changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// The photo being classified
    Image(Photo),
    /// Header row for one model's results
    ModelSection(ClassificationModelResult),
    /// A single label under the preceding model header
    ClassificationResult(ClassificationEntry),
}

impl Row {
    /// Cell identifier used by identifier-based renderers.
    pub fn cell_id(&self) -> &'static str {
        match self {
            Row::Image(_) => "ImageCell",
            Row::ModelSection(_) => "MLSectionCell",
            Row::ClassificationResult(_) => "MLClassifiResultCell",
        }
    }

    pub fn is_model_section(&self) -> bool {
        matches!(self, Row::ModelSection(_))
    }
}

/// Footer rendered below a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionFooter {
    /// Static prompt banner under the photo
    ImagePrompt,
    /// Thin spacer closing the results list
    Spacer,
}

impl SectionFooter {
    pub fn footer_id(&self) -> &'static str {
        match self {
            SectionFooter::ImagePrompt => "ImageCellFooter",
            SectionFooter::Spacer => "Footer",
        }
    }

    /// Preferred height in layout units; `None` lets the renderer size it.
    pub fn height(&self) -> Option<f32> {
        match self {
            SectionFooter::ImagePrompt => None,
            SectionFooter::Spacer => Some(1.0),
        }
    }
}

/// An ordered group of rows with an optional footer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    pub rows: Vec<Row>,
    pub footer: Option<SectionFooter>,
}

impl Section {
    pub fn new(rows: Vec<Row>, footer: Option<SectionFooter>) -> Self {
        Self { rows, footer }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
