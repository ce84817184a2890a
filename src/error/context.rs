//! Error context attached to failures for logging.

use chrono::{DateTime, Utc};

/// Metadata about where and when an error happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `"search_for"`.
    pub operation: String,

    /// Search query in flight, if any.
    pub query: Option<String>,

    /// Photo being worked on, if any.
    pub photo_id: Option<String>,

    /// Component where the error originated.
    pub component: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            query: None,
            photo_id: None,
            component: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_photo_id(mut self, photo_id: impl Into<String>) -> Self {
        self.photo_id = Some(photo_id.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref query) = self.query {
            parts.push(format!("query={:?}", query));
        }
        if let Some(ref photo_id) = self.photo_id {
            parts.push(format!("photo_id={}", photo_id));
        }
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref query) = self.query {
            write!(f, " query={:?}", query)?;
        }
        if let Some(ref photo_id) = self.photo_id {
            write!(f, " photo={}", photo_id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = ErrorContext::new("search_for")
            .with_query("cats")
            .with_component("search_view_model");

        assert_eq!(ctx.operation, "search_for");
        assert_eq!(ctx.query.as_deref(), Some("cats"));
        assert_eq!(ctx.component.as_deref(), Some("search_view_model"));
        assert!(ctx.photo_id.is_none());
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("classify").with_photo_id("p-1");
        assert_eq!(ctx.to_string(), "[classify] photo=p-1");
    }

    #[test]
    fn test_log_string_includes_fields() {
        let ctx = ErrorContext::new("search_for").with_query("dogs");
        let log = ctx.to_log_string();
        assert!(log.starts_with("operation=search_for"));
        assert!(log.contains("query=\"dogs\""));
        assert!(log.contains("timestamp="));
    }
}
