//! Plain-text rendering for the demo binary.

use std::io::Write;
use std::sync::Mutex;
use tokio::sync::mpsc;

use crate::format::{format_count, format_date};
use crate::models::Photo;
use crate::traits::{Navigator, RenderSurface};
use crate::view_state::{Row, Section, SectionFooter};

/// Render a section list as indented text lines.
pub fn render_sections(sections: &[Section]) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        for row in &section.rows {
            lines.push(render_row(row));
        }
        match section.footer {
            Some(SectionFooter::ImagePrompt) => {
                lines.push("  Results are ranked by model confidence".to_string())
            }
            Some(SectionFooter::Spacer) => lines.push(String::new()),
            None => {}
        }
    }
    lines
}

fn render_row(row: &Row) -> String {
    match row {
        Row::Image(photo) => {
            let taken = photo
                .taken_at
                .map(|date| format!(", taken {}", format_date(date)))
                .unwrap_or_default();
            format!(
                "[photo {}] {} bytes{}",
                photo.id,
                format_count(photo.byte_len() as u64),
                taken
            )
        }
        Row::ModelSection(model) => format!("== {} ==", model.model_type),
        Row::ClassificationResult(entry) => {
            format!("  {:<24} {:>7}", entry.label, entry.confidence_text())
        }
    }
}

/// Writes every reload to a `Write` sink, stdout by default.
pub struct ConsoleSurface<W: Write + Send = std::io::Stdout> {
    out: Mutex<W>,
}

impl ConsoleSurface {
    pub fn stdout() -> Self {
        Self {
            out: Mutex::new(std::io::stdout()),
        }
    }
}

impl<W: Write + Send> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> RenderSurface for ConsoleSurface<W> {
    fn reload(&self, sections: &[Section], _animated: bool) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for line in render_sections(sections) {
            if let Err(err) = writeln!(out, "{}", line) {
                tracing::warn!(error = %err, "failed to write results");
                return;
            }
        }
    }
}

/// Navigator that forwards selected photos over a channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Photo>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Photo>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn show_classification(&self, photo: Photo) {
        if self.tx.send(photo).is_err() {
            tracing::warn!("navigation receiver dropped; selection ignored");
        }
    }
}
