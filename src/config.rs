//! Application configuration.
//!
//! Values come from defaults, then an optional JSON file, then
//! `PHOTOSIFT_*` environment variables.
//!
//! ```ignore
//! use photosift::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_fallback_title("Find Photos")
//!     .with_min_confidence(0.2);
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{classify_io_error, SiftResult, SystemError};
use crate::view_model::ResultFilter;

pub const ENV_TITLE: &str = "PHOTOSIFT_TITLE";
pub const ENV_MIN_CONFIDENCE: &str = "PHOTOSIFT_MIN_CONFIDENCE";
pub const ENV_MAX_RESULTS: &str = "PHOTOSIFT_MAX_RESULTS";
pub const ENV_PAGE_SIZE: &str = "PHOTOSIFT_PAGE_SIZE";
pub const ENV_CATALOG: &str = "PHOTOSIFT_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Grid title shown before any search completes
    pub fallback_title: String,
    /// Classifications below this confidence are not displayed
    pub min_confidence: f32,
    /// Maximum displayed labels per model
    pub max_results_per_model: usize,
    /// Photos per search page
    pub page_size: u32,
    /// JSON photo catalog backing the demo provider
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fallback_title: "Photo Search".to_string(),
            min_confidence: 0.05,
            max_results_per_model: 5,
            page_size: 20,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_max_results_per_model(mut self, max: usize) -> Self {
        self.max_results_per_model = max;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// `~/.photosift/config.json`
    pub fn default_path() -> SiftResult<PathBuf> {
        let home = dirs::home_dir().ok_or(SystemError::NoHomeDirectory)?;
        Ok(home.join(".photosift").join("config.json"))
    }

    /// Load a config file. Missing keys keep their defaults.
    pub fn load_file(path: &Path) -> SiftResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "read config"))?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// only if present. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> SiftResult<Self> {
        let base = match explicit {
            Some(path) => Self::load_file(path)?,
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::load_file(&path)?,
                _ => Self::default(),
            },
        };

        let config = base.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PHOTOSIFT_*` overrides from the process environment.
    pub fn apply_env(self) -> SiftResult<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_vars<F>(mut self, lookup: F) -> SiftResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(title) = lookup(ENV_TITLE) {
            self.fallback_title = title;
        }
        if let Some(raw) = lookup(ENV_MIN_CONFIDENCE) {
            self.min_confidence = parse_var(ENV_MIN_CONFIDENCE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_RESULTS) {
            self.max_results_per_model = parse_var(ENV_MAX_RESULTS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = parse_var(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(path) = lookup(ENV_CATALOG) {
            self.catalog_path = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    pub fn validate(&self) -> SiftResult<()> {
        if self.fallback_title.trim().is_empty() {
            return Err(invalid("fallback_title", "must not be empty").into());
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(invalid("min_confidence", "must be between 0 and 1").into());
        }
        if self.max_results_per_model == 0 {
            return Err(invalid("max_results_per_model", "must be at least 1").into());
        }
        if self.page_size == 0 {
            return Err(invalid("page_size", "must be at least 1").into());
        }
        Ok(())
    }

    pub fn result_filter(&self) -> ResultFilter {
        ResultFilter::new(self.min_confidence, self.max_results_per_model)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, SystemError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| invalid(key, &e.to_string()))
}

fn invalid(key: &str, message: &str) -> SystemError {
    SystemError::InvalidConfig {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiftError;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.fallback_title, "Photo Search");
        assert_eq!(config.page_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_fallback_title("Find")
            .with_min_confidence(0.3)
            .with_max_results_per_model(2)
            .with_page_size(9)
            .with_catalog_path("/tmp/catalog.json");
        assert_eq!(config.fallback_title, "Find");
        assert_eq!(config.min_confidence, 0.3);
        assert_eq!(config.max_results_per_model, 2);
        assert_eq!(config.page_size, 9);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_apply_vars_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_TITLE, "Browse"),
            (ENV_MIN_CONFIDENCE, "0.25"),
            (ENV_PAGE_SIZE, " 12 "),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::default()
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.fallback_title, "Browse");
        assert_eq!(config.min_confidence, 0.25);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.max_results_per_model, 5);
    }

    #[test]
    fn test_apply_vars_rejects_garbage() {
        let err = AppConfig::default()
            .apply_vars(|key| (key == ENV_PAGE_SIZE).then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            SiftError::System(SystemError::InvalidConfig { ref key, .. }) if key == ENV_PAGE_SIZE
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(AppConfig::default().with_min_confidence(1.5).validate().is_err());
        assert!(AppConfig::default().with_page_size(0).validate().is_err());
        assert!(AppConfig::default()
            .with_max_results_per_model(0)
            .validate()
            .is_err());
        assert!(AppConfig::default().with_fallback_title("  ").validate().is_err());
    }

    #[test]
    fn test_load_file_keeps_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"page_size": 8, "fallback_title": "Mine"}}"#).unwrap();

        let config = AppConfig::load_file(file.path()).unwrap();
        assert_eq!(config.page_size, 8);
        assert_eq!(config.fallback_title, "Mine");
        assert_eq!(config.max_results_per_model, 5);
    }

    #[test]
    fn test_load_file_missing() {
        let err = AppConfig::load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(
            err,
            SiftError::System(SystemError::FileNotFound { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_load_with_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"min_confidence": 0.4}}"#).unwrap();

        std::env::set_var(ENV_MAX_RESULTS, "3");
        let config = AppConfig::load(Some(file.path()));
        std::env::remove_var(ENV_MAX_RESULTS);

        let config = config.unwrap();
        assert_eq!(config.min_confidence, 0.4);
        assert_eq!(config.max_results_per_model, 3);
    }

    #[test]
    #[serial]
    fn test_load_env_invalid_value_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        std::env::set_var(ENV_MIN_CONFIDENCE, "2.0");
        let result = AppConfig::load(Some(file.path()));
        std::env::remove_var(ENV_MIN_CONFIDENCE);
        assert!(result.is_err());
    }
}
