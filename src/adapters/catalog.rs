//! JSON photo catalog used as a local provider and classifier.
//!
//! ```json
//! {
//!   "photos": [
//!     {
//!       "id": 17,
//!       "tags": ["beach", "summer"],
//!       "taken_at": "2024-07-02T10:15:00Z",
//!       "image_base64": "iVBORw0KGgo=",
//!       "labels": { "scenes": [["beach", 0.91], ["ocean", 0.42]] }
//!     }
//!   ]
//! }
//! ```
//!
//! A query matches a photo when every whitespace-separated term occurs in
//! at least one of its tags, ignoring case.

use async_trait::async_trait;
use base64::Engine as _;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{classify_io_error, ClassifyError, ProviderError, SiftResult};
use crate::models::{deserialize_id, ClassificationEntry, ModelType, Photo, PhotoId, SearchPage};
use crate::traits::{ImageClassifier, PhotoProvider};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    photos: Vec<CatalogRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    taken_at: Option<DateTime<Utc>>,
    #[serde(default)]
    image_base64: String,
    #[serde(default)]
    labels: BTreeMap<String, Vec<(String, f32)>>,
}

#[derive(Debug, Clone)]
struct CatalogPhoto {
    id: PhotoId,
    tags: Vec<String>,
    taken_at: Option<DateTime<Utc>>,
    image: Bytes,
    labels: BTreeMap<ModelType, Vec<ClassificationEntry>>,
}

impl CatalogPhoto {
    fn matches(&self, terms: &[String]) -> bool {
        !terms.is_empty()
            && terms
                .iter()
                .all(|term| self.tags.iter().any(|tag| tag.contains(term.as_str())))
    }

    fn to_photo(&self, query: &str) -> Photo {
        Photo {
            id: self.id.clone(),
            image: self.image.clone(),
            query: query.to_string(),
            taken_at: self.taken_at,
        }
    }
}

/// Parsed photo catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    photos: Vec<CatalogPhoto>,
}

impl Catalog {
    pub fn from_json(raw: &str) -> SiftResult<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let mut photos = Vec::with_capacity(file.photos.len());

        for record in file.photos {
            let image = base64::engine::general_purpose::STANDARD
                .decode(record.image_base64.trim())
                .map_err(|e| ProviderError::Malformed {
                    message: format!("photo {}: bad image_base64: {}", record.id, e),
                })?;

            let labels = record
                .labels
                .into_iter()
                .map(|(model, entries)| {
                    let entries = entries
                        .into_iter()
                        .map(|(label, confidence)| ClassificationEntry::new(label, confidence))
                        .collect();
                    (ModelType::new(model), entries)
                })
                .collect();

            photos.push(CatalogPhoto {
                id: PhotoId::new(record.id),
                tags: record.tags.iter().map(|tag| tag.to_lowercase()).collect(),
                taken_at: record.taken_at,
                image: Bytes::from(image),
                labels,
            });
        }

        tracing::debug!(photos = photos.len(), "catalog parsed");
        Ok(Self { photos })
    }

    pub fn load(path: &Path) -> SiftResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "read catalog"))?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Every model type that has labels for at least one photo, sorted.
    pub fn model_types(&self) -> Vec<ModelType> {
        let mut types: Vec<ModelType> = self
            .photos
            .iter()
            .flat_map(|photo| photo.labels.keys().cloned())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    fn search(&self, query: &str) -> Vec<Photo> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        self.photos
            .iter()
            .filter(|photo| photo.matches(&terms))
            .map(|photo| photo.to_photo(query))
            .collect()
    }

    fn labels(&self, id: &PhotoId, model_type: &ModelType) -> Option<Vec<ClassificationEntry>> {
        let photo = self.photos.iter().find(|photo| &photo.id == id)?;
        Some(photo.labels.get(model_type).cloned().unwrap_or_default())
    }
}

/// Photo provider backed by a [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    catalog: Arc<Catalog>,
    page_size: u32,
}

impl CatalogProvider {
    pub fn new(catalog: Arc<Catalog>, page_size: u32) -> Self {
        Self { catalog, page_size }
    }
}

#[async_trait]
impl PhotoProvider for CatalogProvider {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, ProviderError> {
        let matches = self.catalog.search(query);
        SearchPage::paginate(&matches, page, self.page_size)
    }

    fn name(&self) -> &str {
        "catalog"
    }
}

/// Classifier that replays the labels a [`Catalog`] records for one model.
#[derive(Debug, Clone)]
pub struct CatalogClassifier {
    catalog: Arc<Catalog>,
    model_type: ModelType,
}

impl CatalogClassifier {
    pub fn new(catalog: Arc<Catalog>, model_type: ModelType) -> Self {
        Self {
            catalog,
            model_type,
        }
    }

    /// One classifier per model type found in the catalog.
    pub fn all(catalog: &Arc<Catalog>) -> Vec<Arc<dyn ImageClassifier>> {
        catalog
            .model_types()
            .into_iter()
            .map(|model_type| {
                Arc::new(CatalogClassifier::new(catalog.clone(), model_type))
                    as Arc<dyn ImageClassifier>
            })
            .collect()
    }
}

#[async_trait]
impl ImageClassifier for CatalogClassifier {
    fn model_type(&self) -> ModelType {
        self.model_type.clone()
    }

    async fn classify(&self, photo: &Photo) -> Result<Vec<ClassificationEntry>, ClassifyError> {
        self.catalog
            .labels(&photo.id, &self.model_type)
            .ok_or_else(|| ClassifyError::UnsupportedImage {
                photo_id: photo.id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SiftError, SystemError};

    const CATALOG: &str = r#"{
        "photos": [
            {
                "id": 1,
                "tags": ["Beach", "summer"],
                "taken_at": "2024-07-02T10:15:00Z",
                "image_base64": "AQID",
                "labels": {
                    "scenes": [["beach", 0.91], ["ocean", 0.42]],
                    "objects": [["umbrella", 0.6]]
                }
            },
            {
                "id": "two",
                "tags": ["beach", "winter"],
                "labels": { "scenes": [["snow", 0.8]] }
            },
            { "id": 3, "tags": ["city"] }
        ]
    }"#;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_json(CATALOG).unwrap())
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.model_types(),
            vec![ModelType::from("objects"), ModelType::from("scenes")]
        );
    }

    #[test]
    fn test_bad_base64_is_malformed() {
        let raw = r#"{"photos": [{"id": 1, "image_base64": "***"}]}"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(
            err,
            SiftError::Provider(ProviderError::Malformed { .. })
        ));
    }

    #[test]
    fn test_bad_json_is_system_error() {
        let err = Catalog::from_json("{\"photos\": 4}").unwrap_err();
        assert!(matches!(
            err,
            SiftError::System(SystemError::InvalidJson { .. })
        ));
    }

    #[tokio::test]
    async fn test_provider_matches_all_terms_case_insensitively() {
        let provider = CatalogProvider::new(catalog(), 10);

        let page = provider.search("BEACH", 1).await.unwrap();
        assert_eq!(page.total_results, 2);
        assert_eq!(page.photos[0].id.as_str(), "1");
        assert_eq!(page.photos[0].query, "BEACH");
        assert_eq!(page.photos[0].image.as_ref(), &[1u8, 2, 3]);

        let page = provider.search("beach winter", 1).await.unwrap();
        assert_eq!(page.total_results, 1);
        assert_eq!(page.photos[0].id.as_str(), "two");

        let page = provider.search("mountain", 1).await.unwrap();
        assert!(page.photos.is_empty());
    }

    #[tokio::test]
    async fn test_provider_paginates() {
        let provider = CatalogProvider::new(catalog(), 1);
        let page = provider.search("beach", 2).await.unwrap();
        assert_eq!(page.page_count, 2);
        assert_eq!(page.photos[0].id.as_str(), "two");
        assert!(provider.search("beach", 3).await.is_err());
    }

    #[tokio::test]
    async fn test_classifier_replays_labels() {
        let catalog = catalog();
        let scenes = CatalogClassifier::new(catalog.clone(), ModelType::from("scenes"));
        let photo = Photo::new("1", Bytes::new(), "beach");

        let entries = scenes.classify(&photo).await.unwrap();
        assert_eq!(entries[0], ClassificationEntry::new("beach", 0.91));

        let city = Photo::new("3", Bytes::new(), "city");
        assert!(scenes.classify(&city).await.unwrap().is_empty());

        let unknown = Photo::new("99", Bytes::new(), "x");
        assert!(matches!(
            scenes.classify(&unknown).await,
            Err(ClassifyError::UnsupportedImage { .. })
        ));
    }

    #[test]
    fn test_all_classifiers() {
        let classifiers = CatalogClassifier::all(&catalog());
        let types: Vec<_> = classifiers.iter().map(|c| c.model_type()).collect();
        assert_eq!(types, vec![ModelType::from("objects"), ModelType::from("scenes")]);
    }
}
