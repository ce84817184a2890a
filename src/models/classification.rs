//! Classification results produced by image models.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::format::format_confidence;

/// Identifies which model produced a classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelType(pub String);

impl ModelType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A single (label, confidence) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    pub label: String,
    /// Model confidence in `0.0..=1.0`
    pub confidence: f32,
}

impl ClassificationEntry {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// Confidence rendered as a percentage, e.g. `"87.3%"`.
    pub fn confidence_text(&self) -> String {
        format_confidence(self.confidence)
    }
}

/// One model's full output for the current photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationModelResult {
    pub model_type: ModelType,
    /// Sorted by descending confidence
    pub entries: Vec<ClassificationEntry>,
}

impl ClassificationModelResult {
    /// Build a result, ordering entries from most to least confident.
    pub fn new(model_type: ModelType, mut entries: Vec<ClassificationEntry>) -> Self {
        sort_by_confidence(&mut entries);
        Self {
            model_type,
            entries,
        }
    }

    /// The most confident entry, if the model returned anything.
    pub fn top(&self) -> Option<&ClassificationEntry> {
        self.entries.first()
    }
}

/// A scored batch of classifications tagged with the model that made them.
///
/// Batches are what the results list actually displays; they are usually a
/// filtered view of a [`ClassificationModelResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBatch {
    pub model_type: ModelType,
    pub entries: Vec<ClassificationEntry>,
}

impl ClassificationBatch {
    pub fn new(model_type: ModelType, entries: Vec<ClassificationEntry>) -> Self {
        Self {
            model_type,
            entries,
        }
    }

    /// Keep entries at or above `min_confidence`, at most `max_entries` of
    /// them, preserving the result's order.
    pub fn filtered(result: &ClassificationModelResult, min_confidence: f32, max_entries: usize) -> Self {
        let entries = result
            .entries
            .iter()
            .filter(|entry| entry.confidence >= min_confidence)
            .take(max_entries)
            .cloned()
            .collect();
        Self::new(result.model_type.clone(), entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn sort_by_confidence(entries: &mut [ClassificationEntry]) {
    entries.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
}
