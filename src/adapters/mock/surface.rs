//! Recording render surface and navigator for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;

use crate::models::Photo;
use crate::traits::{Navigator, RenderSurface};
use crate::view_state::Section;

/// One recorded `reload` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedReload {
    pub sections: Vec<Section>,
    pub animated: bool,
}

/// Render surface that remembers every reload.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    reloads: Arc<Mutex<Vec<RecordedReload>>>,
    count: Arc<watch::Sender<usize>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            reloads: Arc::new(Mutex::new(Vec::new())),
            count: Arc::new(watch::Sender::new(0)),
        }
    }

    pub fn reloads(&self) -> Vec<RecordedReload> {
        self.reloads.lock().unwrap().clone()
    }

    pub fn reload_count(&self) -> usize {
        *self.count.borrow()
    }

    pub fn last(&self) -> Option<RecordedReload> {
        self.reloads.lock().unwrap().last().cloned()
    }

    /// Wait until at least `n` reloads happened. Returns false on timeout.
    pub async fn wait_for_reloads(&self, n: usize, within: Duration) -> bool {
        let mut rx = self.count.subscribe();
        tokio::time::timeout(within, rx.wait_for(|count| *count >= n))
            .await
            .map(|waited| waited.is_ok())
            .unwrap_or(false)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn reload(&self, sections: &[Section], animated: bool) {
        self.reloads.lock().unwrap().push(RecordedReload {
            sections: sections.to_vec(),
            animated,
        });
        self.count.send_modify(|count| *count += 1);
    }
}

/// Navigator that remembers every pushed photo.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pushed: Arc<Mutex<Vec<Photo>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pushed(&self) -> Vec<Photo> {
        self.pushed.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn show_classification(&self, photo: Photo) {
        self.pushed.lock().unwrap().push(photo);
    }
}
