use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-assigned photo identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub String);

impl PhotoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A photo returned by a search.
///
/// Immutable once fetched. The image bytes are reference-counted so rows
/// and screens can hold copies without duplicating the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    pub id: PhotoId,
    /// Encoded image data as delivered by the provider
    pub image: Bytes,
    /// The search query that produced this photo
    pub query: String,
    /// Capture date, when the provider knows it
    pub taken_at: Option<DateTime<Utc>>,
}

impl Photo {
    pub fn new(id: impl Into<PhotoId>, image: impl Into<Bytes>, query: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            query: query.into(),
            taken_at: None,
        }
    }

    pub fn with_taken_at(mut self, taken_at: DateTime<Utc>) -> Self {
        self.taken_at = Some(taken_at);
        self
    }

    /// Size of the encoded image in bytes.
    pub fn byte_len(&self) -> usize {
        self.image.len()
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
