//! Mock image classifier for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::ClassifyError;
use crate::models::{ClassificationEntry, ModelType, Photo};
use crate::traits::ImageClassifier;

/// Classifier that returns canned entries, or always fails.
#[derive(Debug, Clone)]
pub struct MockClassifier {
    model_type: ModelType,
    entries: Option<Vec<ClassificationEntry>>,
    calls: Arc<AtomicUsize>,
}

impl MockClassifier {
    pub fn new(model_type: &str, entries: Vec<ClassificationEntry>) -> Self {
        Self {
            model_type: ModelType::from(model_type),
            entries: Some(entries),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(model_type: &str) -> Self {
        Self {
            model_type: ModelType::from(model_type),
            entries: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `classify` ran.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageClassifier for MockClassifier {
    fn model_type(&self) -> ModelType {
        self.model_type.clone()
    }

    async fn classify(&self, _photo: &Photo) -> Result<Vec<ClassificationEntry>, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.entries {
            Some(entries) => Ok(entries.clone()),
            None => Err(ClassifyError::ModelFailed {
                model: self.model_type.to_string(),
                message: "mock failure".to_string(),
            }),
        }
    }
}
