mod classification;
mod pagination;
mod photo;

pub use classification::{ClassificationBatch, ClassificationEntry, ClassificationModelResult, ModelType};
pub use pagination::{PaginationStatus, SearchPage};
pub use photo::{Photo, PhotoId};

use serde::Deserializer;

/// Helper to deserialize id as either string or integer
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct WithId {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[test]
    fn test_deserialize_string_id() {
        let parsed: WithId = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(parsed.id, "abc");
    }

    #[test]
    fn test_deserialize_integer_id() {
        let parsed: WithId = serde_json::from_str(r#"{"id": 4217}"#).unwrap();
        assert_eq!(parsed.id, "4217");
    }
}
