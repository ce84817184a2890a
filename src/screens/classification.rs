//! Classification results screen.

use std::sync::Arc;
use tokio::sync::watch;

use crate::error::{SiftResult, UiError};
use crate::reactive::{combine_latest3, observe, Subscription};
use crate::traits::RenderSurface;
use crate::view_model::ClassificationViewModel;
use crate::view_state::{compose, SectionList};

const SCREEN: &str = "classification";

struct Binding {
    sections: watch::Receiver<SectionList>,
    renders: watch::Receiver<usize>,
    _subscription: Subscription,
}

/// Shows one photo and its classifications grouped by model.
///
/// While visible, every change to the photo, the displayed models or the
/// filtered classifications recomposes the whole list and reloads the
/// surface without animation.
pub struct ClassificationScreen {
    view_model: Arc<ClassificationViewModel>,
    surface: Arc<dyn RenderSurface>,
    binding: Option<Binding>,
}

impl ClassificationScreen {
    pub fn new(view_model: Arc<ClassificationViewModel>, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            view_model,
            surface,
            binding: None,
        }
    }

    /// Start composing and rendering. Must run inside a tokio runtime.
    pub fn appear(&mut self) {
        if self.binding.is_some() {
            return;
        }

        let (sections, composer) = combine_latest3(
            self.view_model.photo(),
            self.view_model.core_ml_view_models(),
            self.view_model.filtered_classifications(),
            |photo, models, batches| compose(photo, models, batches),
        );

        let surface = self.surface.clone();
        let (render_count, renders) = watch::channel(0usize);
        let renderer = observe(sections.clone(), move |sections: &SectionList| {
            surface.reload(sections, false);
            render_count.send_modify(|count| *count += 1);
        });

        self.binding = Some(Binding {
            sections,
            renders,
            _subscription: composer.and(renderer),
        });
    }

    pub fn disappear(&mut self) {
        self.binding = None;
    }

    pub fn is_visible(&self) -> bool {
        self.binding.is_some()
    }

    /// Latest composed sections, if visible.
    pub fn sections(&self) -> Option<SectionList> {
        self.binding
            .as_ref()
            .map(|binding| binding.sections.borrow().clone())
    }

    /// Wait until the surface has been reloaded `count` times since `appear`.
    pub async fn wait_for_renders(&self, count: usize) -> SiftResult<()> {
        let mut renders = self
            .binding
            .as_ref()
            .map(|binding| binding.renders.clone())
            .ok_or_else(not_visible)?;
        renders
            .wait_for(|rendered| *rendered >= count)
            .await
            .map_err(|_| not_visible())?;
        Ok(())
    }

    /// Run the view model's classifiers; the list updates as results land.
    pub async fn classify(&self) -> SiftResult<usize> {
        self.view_model.classify().await
    }
}

fn not_visible() -> UiError {
    UiError::NotVisible {
        screen: SCREEN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockClassifier, RecordingSurface};
    use crate::error::SiftError;
    use crate::models::{ClassificationEntry, Photo};
    use crate::traits::ImageClassifier;
    use crate::view_model::ResultFilter;
    use crate::view_state::{IMAGE_SECTION, RESULTS_SECTION};
    use std::time::Duration;

    fn screen() -> (ClassificationScreen, RecordingSurface) {
        let classifiers: Vec<Arc<dyn ImageClassifier>> = vec![
            Arc::new(MockClassifier::new(
                "scenes",
                vec![
                    ClassificationEntry::new("beach", 0.8),
                    ClassificationEntry::new("forest", 0.01),
                ],
            )),
            Arc::new(MockClassifier::new(
                "objects",
                vec![ClassificationEntry::new("umbrella", 0.6)],
            )),
        ];
        let vm = ClassificationViewModel::new(
            Photo::new("p-1", vec![1u8; 16], "beach"),
            classifiers,
            ResultFilter::default(),
        );
        let surface = RecordingSurface::new();
        (
            ClassificationScreen::new(Arc::new(vm), Arc::new(surface.clone())),
            surface,
        )
    }

    async fn wait_for_rows(surface: &RecordingSurface, rows: usize) -> bool {
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if let Some(last) = surface.last() {
                    if last.sections[RESULTS_SECTION].len() == rows {
                        return;
                    }
                }
                tokio::task::yield_now().await;
            }
        })
        .await
        .is_ok()
    }

    #[tokio::test]
    async fn test_appear_renders_photo_only() {
        let (mut screen, surface) = screen();
        assert!(screen.sections().is_none());
        screen.appear();

        assert!(surface.wait_for_reloads(1, Duration::from_secs(1)).await);
        let first = surface.last().unwrap();
        assert!(!first.animated);
        assert_eq!(first.sections.len(), 2);
        assert_eq!(first.sections[IMAGE_SECTION].len(), 1);
        assert!(first.sections[RESULTS_SECTION].is_empty());
    }

    #[tokio::test]
    async fn test_classify_reloads_grouped_rows() {
        let (mut screen, surface) = screen();
        screen.appear();
        assert_eq!(screen.classify().await.unwrap(), 2);

        // Two model headers plus "beach" and "umbrella"; "forest" is below threshold.
        assert!(wait_for_rows(&surface, 4).await);
        assert!(surface.reloads().iter().all(|reload| !reload.animated));
        assert_eq!(screen.sections().unwrap()[RESULTS_SECTION].len(), 4);
    }

    #[tokio::test]
    async fn test_disappear_stops_reloads() {
        let (mut screen, surface) = screen();
        screen.appear();
        assert!(surface.wait_for_reloads(1, Duration::from_secs(1)).await);
        screen.disappear();

        screen.classify().await.unwrap();
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(surface.reload_count(), 1);
    }

    #[tokio::test]
    async fn test_wait_for_renders_follows_surface() {
        let (mut screen, surface) = screen();
        let err = screen.wait_for_renders(1).await.unwrap_err();
        assert!(matches!(err, SiftError::Ui(UiError::NotVisible { .. })));

        screen.appear();
        screen.wait_for_renders(1).await.unwrap();
        assert_eq!(surface.reload_count(), 1);

        screen.classify().await.unwrap();
        screen.wait_for_renders(2).await.unwrap();
        assert_eq!(surface.last().unwrap().sections[RESULTS_SECTION].len(), 4);
    }
}
