//! Classification view model backing the results screen.

use futures::future::join_all;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

use crate::error::{ClassifyError, ErrorContext, SiftError, SiftResult};
use crate::models::{ClassificationBatch, ClassificationModelResult, ModelType, Photo};
use crate::traits::ImageClassifier;

/// Which classifications are worth showing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultFilter {
    pub min_confidence: f32,
    pub max_per_model: usize,
}

impl ResultFilter {
    pub fn new(min_confidence: f32, max_per_model: usize) -> Self {
        Self {
            min_confidence,
            max_per_model,
        }
    }

    /// Show every entry.
    pub fn unfiltered() -> Self {
        Self::new(0.0, usize::MAX)
    }

    pub fn apply(&self, result: &ClassificationModelResult) -> ClassificationBatch {
        ClassificationBatch::filtered(result, self.min_confidence, self.max_per_model)
    }
}

impl Default for ResultFilter {
    fn default() -> Self {
        Self::new(0.05, 5)
    }
}

#[derive(Debug, Default)]
struct ClassificationState {
    results: Vec<ClassificationModelResult>,
    visible_models: Option<Vec<ModelType>>,
    filter: ResultFilter,
    /// Bumped on every photo change; results from an older photo are dropped.
    generation: u64,
}

impl ClassificationState {
    fn displayed_models(&self) -> Vec<ClassificationModelResult> {
        self.results
            .iter()
            .filter(|result| match &self.visible_models {
                Some(visible) => visible.contains(&result.model_type),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Batches for every model, including hidden ones.
    fn filtered_batches(&self) -> Vec<ClassificationBatch> {
        self.results
            .iter()
            .map(|result| self.filter.apply(result))
            .collect()
    }
}

/// Runs a set of classifiers over one photo and publishes the results.
///
/// Observables:
/// - `photo`: the photo being classified
/// - `core_ml_view_models`: one result per displayed model, in classifier order
/// - `filtered_classifications`: filtered batches for every model that succeeded
pub struct ClassificationViewModel {
    classifiers: Vec<Arc<dyn ImageClassifier>>,
    photo: watch::Sender<Photo>,
    core_ml_view_models: watch::Sender<Vec<ClassificationModelResult>>,
    filtered_classifications: watch::Sender<Vec<ClassificationBatch>>,
    state: Mutex<ClassificationState>,
}

impl ClassificationViewModel {
    pub fn new(
        photo: Photo,
        classifiers: Vec<Arc<dyn ImageClassifier>>,
        filter: ResultFilter,
    ) -> Self {
        Self {
            classifiers,
            photo: watch::Sender::new(photo),
            core_ml_view_models: watch::Sender::new(Vec::new()),
            filtered_classifications: watch::Sender::new(Vec::new()),
            state: Mutex::new(ClassificationState {
                filter,
                ..ClassificationState::default()
            }),
        }
    }

    pub fn photo(&self) -> watch::Receiver<Photo> {
        self.photo.subscribe()
    }

    pub fn core_ml_view_models(&self) -> watch::Receiver<Vec<ClassificationModelResult>> {
        self.core_ml_view_models.subscribe()
    }

    pub fn filtered_classifications(&self) -> watch::Receiver<Vec<ClassificationBatch>> {
        self.filtered_classifications.subscribe()
    }

    pub fn current_photo(&self) -> Photo {
        self.photo.borrow().clone()
    }

    pub fn model_types(&self) -> Vec<ModelType> {
        self.classifiers.iter().map(|c| c.model_type()).collect()
    }

    /// Run every classifier over the current photo concurrently.
    ///
    /// Models that fail are logged and left out. Returns how many models
    /// produced results, or `AllModelsFailed` if none did. If the photo is
    /// replaced while the classifiers run, their results are discarded and
    /// the call returns `Ok(0)`.
    pub async fn classify(&self) -> SiftResult<usize> {
        if self.classifiers.is_empty() {
            return Err(ClassifyError::NoModels.into());
        }

        let (photo, generation) = {
            let state = self.lock_state();
            (self.current_photo(), state.generation)
        };
        tracing::info!(
            photo_id = %photo.id,
            models = self.classifiers.len(),
            "classifying photo"
        );

        let runs = self.classifiers.iter().map(|classifier| {
            let photo = &photo;
            async move { (classifier.model_type(), classifier.classify(photo).await) }
        });
        let outcomes = join_all(runs).await;

        let mut state = self.lock_state();
        if state.generation != generation {
            tracing::debug!(
                photo_id = %photo.id,
                current = %self.photo.borrow().id,
                "photo changed during classification, dropping results"
            );
            return Ok(0);
        }

        let mut results = Vec::with_capacity(outcomes.len());
        let mut failed = 0;
        for (model_type, outcome) in outcomes {
            match outcome {
                Ok(entries) => {
                    tracing::debug!(model = %model_type, entries = entries.len(), "model finished");
                    results.push(ClassificationModelResult::new(model_type, entries));
                }
                Err(err) => {
                    tracing::warn!(model = %model_type, error = %err, "model failed");
                    failed += 1;
                }
            }
        }

        if results.is_empty() {
            let err = SiftError::from(ClassifyError::AllModelsFailed { count: failed });
            return Err(err.with_context(
                ErrorContext::new("classify")
                    .with_photo_id(photo.id.as_str())
                    .with_component("classification_view_model"),
            ));
        }

        let succeeded = results.len();
        state.results = results;
        self.publish_models(&state);
        self.publish_batches(&state);
        Ok(succeeded)
    }

    /// Switch to a different photo, clearing previous results.
    ///
    /// Results are cleared before the new photo goes out, so no observer
    /// sees the new photo next to the old photo's labels.
    pub fn set_photo(&self, photo: Photo) {
        let mut state = self.lock_state();
        state.generation += 1;
        state.results.clear();
        self.publish_models(&state);
        self.publish_batches(&state);
        self.photo.send_replace(photo);
    }

    /// Change the confidence filter and republish the filtered batches.
    pub fn set_filter(&self, filter: ResultFilter) {
        let mut state = self.lock_state();
        state.filter = filter;
        self.publish_batches(&state);
    }

    /// Restrict which models are displayed; `None` shows all of them.
    pub fn set_visible_models(&self, visible: Option<Vec<ModelType>>) {
        let mut state = self.lock_state();
        state.visible_models = visible;
        self.publish_models(&state);
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ClassificationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish_models(&self, state: &ClassificationState) {
        self.core_ml_view_models
            .send_replace(state.displayed_models());
    }

    fn publish_batches(&self, state: &ClassificationState) {
        self.filtered_classifications
            .send_replace(state.filtered_batches());
    }
}
