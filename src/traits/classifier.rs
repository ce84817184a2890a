//! Image classifier trait abstraction.

use async_trait::async_trait;

use crate::error::ClassifyError;
use crate::models::{ClassificationEntry, ModelType, Photo};

/// One image classification model.
///
/// Each classifier reports a single [`ModelType`]; the classification view
/// model runs all of its classifiers over the same photo and groups the
/// results by that tag.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    /// The tag attached to every result from this model.
    fn model_type(&self) -> ModelType;

    /// Classify a photo. Entries may come back in any order.
    async fn classify(&self, photo: &Photo) -> Result<Vec<ClassificationEntry>, ClassifyError>;
}
